// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cmd::CliTrainer;
use crate::cmd::cards::add_card;
use crate::cmd::cards::edit_card;
use crate::cmd::cards::list_cards;
use crate::cmd::cards::remove_card;
use crate::cmd::cards::set_difficulty;
use crate::cmd::drill::learn_session;
use crate::cmd::drill::test_session;
use crate::cmd::import::import_file;
use crate::cmd::sets::list_sets;
use crate::cmd::sets::new_set;
use crate::cmd::sets::select_set;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::config::CONFIG_FILE_NAME;
use crate::config::Config;
use crate::error::Fallible;
use crate::store::JsonStore;
use crate::trainer::Trainer;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the profile document. Overrides the configuration file.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Path to the configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the sets.
    Sets,
    /// Create an empty set.
    NewSet {
        /// Name of the set.
        name: String,
    },
    /// Make a set the active one.
    Select {
        /// Name of the set.
        name: String,
    },
    /// Import `source;target[;difficulty]` lines from a text file.
    Import {
        /// Path to the word list.
        file: PathBuf,
        /// Set to import into. Defaults to the active set.
        #[arg(long)]
        set: Option<String>,
    },
    /// List the cards in the active set.
    Cards,
    /// Add a card to the active set.
    Add { source: String, target: String },
    /// Change the text of a card in the active set.
    Edit {
        /// Card number, as shown by `cards`.
        number: usize,
        source: String,
        target: String,
    },
    /// Remove a card from the active set.
    Remove {
        /// Card number, as shown by `cards`.
        number: usize,
    },
    /// Override a card's difficulty.
    Difficulty {
        /// Card number, as shown by `cards`.
        number: usize,
        /// Easy, Medium, or Hard.
        tier: String,
    },
    /// Review cards at your own pace.
    Learn {
        /// Set to study. Defaults to the active set.
        #[arg(long)]
        set: Option<String>,
    },
    /// Take a scored test.
    Test {
        /// Set to test. Defaults to the active set.
        #[arg(long)]
        set: Option<String>,
    },
    /// Print statistics.
    Stats {
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config_path: PathBuf = cli
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let config: Config = Config::load(&config_path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    let data_path: PathBuf = cli.data.unwrap_or_else(|| config.data_path.clone());
    log::debug!("Using profile at {}.", data_path.display());
    let store = JsonStore::new(data_path);
    let mut trainer: CliTrainer = Trainer::new(store, StdRng::from_os_rng());

    match cli.command {
        Command::Sets => list_sets(&trainer),
        Command::NewSet { name } => new_set(&mut trainer, &name),
        Command::Select { name } => select_set(&mut trainer, &name),
        Command::Import { file, set } => import_file(&mut trainer, &file, set.as_deref()),
        Command::Cards => list_cards(&trainer),
        Command::Add { source, target } => add_card(&mut trainer, &source, &target),
        Command::Edit {
            number,
            source,
            target,
        } => edit_card(&mut trainer, number, &source, &target),
        Command::Remove { number } => remove_card(&mut trainer, number),
        Command::Difficulty { number, tier } => set_difficulty(&mut trainer, number, &tier),
        Command::Learn { set } => learn_session(&mut trainer, set.as_deref()).await,
        Command::Test { set } => {
            test_session(&mut trainer, set.as_deref(), config.advance_delay()).await
        }
        Command::Stats { format } => print_stats(trainer.profile(), format),
    }
}

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

use crate::cmd::CliTrainer;
use crate::error::Fallible;

pub fn list_sets(trainer: &CliTrainer) -> Fallible<()> {
    let profile = trainer.profile();
    for set in profile.sets.iter() {
        let marker = if set.name == profile.active_set_name {
            "*"
        } else {
            " "
        };
        println!("{marker} {} ({} cards)", set.name, set.len());
    }
    Ok(())
}

pub fn new_set(trainer: &mut CliTrainer, name: &str) -> Fallible<()> {
    trainer.create_set(name)?;
    println!("Created set '{}'.", name.trim());
    Ok(())
}

pub fn select_set(trainer: &mut CliTrainer, name: &str) -> Fallible<()> {
    trainer.select_set(name)?;
    println!("Active set is now '{name}'.");
    Ok(())
}

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

use std::fs::read_to_string;
use std::path::Path;

use crate::cmd::CliTrainer;
use crate::error::Fallible;
use crate::error::fail;

pub fn import_file(trainer: &mut CliTrainer, file: &Path, set: Option<&str>) -> Fallible<()> {
    if !file.exists() {
        return fail(format!("file {} does not exist.", file.display()));
    }
    let content = read_to_string(file)?;
    let count = trainer.import(set, content.lines())?;
    let set_name = set.unwrap_or(trainer.profile().active_set_name.as_str());
    println!("Imported {count} cards into '{set_name}'.");
    Ok(())
}

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

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::session::state::AdvanceToken;

/// How long a scored answer stays on screen before the next card.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1200);

/// A deferred advance running on the tokio runtime. The token it yields
/// still has to be handed back to the machine, which drops it if the
/// session moved on in the meantime.
pub struct PendingAdvance {
    handle: JoinHandle<AdvanceToken>,
}

impl PendingAdvance {
    pub fn schedule(token: AdvanceToken, delay: Duration) -> Self {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            token
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Waits for the delay. Returns `None` if the advance was cancelled.
    pub async fn fired(&mut self) -> Option<AdvanceToken> {
        (&mut self.handle).await.ok()
    }
}

impl Drop for PendingAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

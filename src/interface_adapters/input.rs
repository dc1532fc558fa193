// Input adapter: turns device press/release edges into held-intent state
// the simulation loop samples once per frame.

use tokio::sync::watch;

use crate::domain::ControlIntents;

/// The three gameplay intents a device binding resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TurnUp,
    TurnDown,
    Fire,
}

/// Publisher half of the intent channel. Whatever owns the device binding
/// calls `press`/`release`; the loop holds the receiver.
pub struct IntentPublisher {
    tx: watch::Sender<ControlIntents>,
}

/// Creates the intent channel with everything released.
pub fn intent_channel() -> (IntentPublisher, watch::Receiver<ControlIntents>) {
    let (tx, rx) = watch::channel(ControlIntents::default());
    (IntentPublisher { tx }, rx)
}

impl IntentPublisher {
    pub fn press(&self, intent: Intent) {
        self.set(intent, true);
    }

    pub fn release(&self, intent: Intent) {
        self.set(intent, false);
    }

    fn set(&self, intent: Intent, held: bool) {
        self.tx.send_modify(|intents| match intent {
            Intent::TurnUp => intents.turn_up = held,
            Intent::TurnDown => intents.turn_down = held,
            Intent::Fire => intents.fire = held,
        });
    }
}

use tokio::sync::mpsc;

use crate::state::ClientCommand;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: ClientCommand) {
        // The receiver is gone during teardown; dropping the command is fine.
        let _ = self.tx.send(command);
    }
}

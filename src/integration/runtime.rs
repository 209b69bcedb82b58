use std::{collections::VecDeque, sync::Arc};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::notification::NotificationSurface,
    infrastructure::contact_service::ContactOperation,
};

/// Owns the application state and drives translate → update → execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime whose executor can only feed raw messages back
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let cmd_executor = CmdExecutor::new(raw_msg_tx.clone());

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor,
        }
    }

    /// Create a new Runtime that submits contact requests to a ContactService
    pub fn new_with_contact(
        initial_state: AppState,
        contact_sender: mpsc::UnboundedSender<ContactOperation>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_contact_sender(contact_sender);
        runtime
    }

    pub fn set_contact_sender(&mut self, contact_sender: mpsc::UnboundedSender<ContactOperation>) {
        self.cmd_executor.set_contact_sender(contact_sender);
    }

    pub fn set_notifier(&mut self, notifier: Arc<dyn NotificationSurface>) {
        self.cmd_executor.set_notifier(notifier);
    }

    /// TuiCommand sender for host reactions such as resize
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Take pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        self.cmd_executor
            .execute_commands(&commands)
            .map_err(|e| eyre!("Command execution failed: {e}"))
    }

    /// Execute a single command immediately
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        self.cmd_executor
            .execute_command(cmd)
            .map_err(|e| eyre!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    ///
    /// Each raw message is translated against the state left by the one
    /// before it, so keys queued in the same cycle compose.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages queued locally, then those from services
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            all_commands.extend(self.apply_raw(raw_msg));
        }
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            all_commands.extend(self.apply_raw(raw_msg));
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    fn apply_raw(&mut self, raw_msg: RawMsg) -> Vec<Cmd> {
        translate_raw_to_domain(raw_msg, &self.state)
            .into_iter()
            .flat_map(|msg| self.process_message(msg))
            .collect()
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        let executor = self.cmd_executor.get_stats();
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            section: self.state.ui.section.to_string(),
            is_editing: self.state.is_editing(),
            is_submitting: self.state.contact.is_disabled(),
            toasts: self.state.ui.toasts.len(),
            has_contact_support: executor.has_contact_sender,
            has_notifier: executor.has_notifier,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub section: String,
    pub is_editing: bool,
    pub is_submitting: bool,
    pub toasts: usize,
    pub has_contact_support: bool,
    pub has_notifier: bool,
}

//! Conversation log and the single in-progress reveal.
//!
//! DESIGN
//! ======
//! Entries are append-only. The only mutation of an existing entry is the
//! progressive overwrite of the in-progress assistant entry, which is always
//! the last one. `reveal_seq` is a generation counter: every new exchange,
//! logout, or explicit cancel bumps it, and any async step holding an older
//! generation becomes a no-op at its next check.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
}

/// Handle to the in-progress assistant entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTicket {
    generation: u64,
    index: usize,
}

impl RevealTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ConversationEntry>,
    pub in_progress: Option<RevealTicket>,
    pub reveal_seq: u64,
}

impl ChatState {
    /// Abandon any running reveal and start a new generation.
    pub fn cancel(&mut self) -> u64 {
        self.reveal_seq += 1;
        self.in_progress = None;
        self.reveal_seq
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.reveal_seq == generation
    }

    /// Start a new exchange: cancel the previous one and append the user's text.
    pub fn begin_exchange(&mut self, text: impl Into<String>) -> u64 {
        let generation = self.cancel();
        self.entries.push(ConversationEntry { role: Role::User, content: text.into() });
        generation
    }

    /// Append the empty placeholder for a reveal. `None` if `generation` is stale.
    pub fn begin_reveal(&mut self, generation: u64) -> Option<RevealTicket> {
        if !self.is_current(generation) {
            return None;
        }
        self.entries.push(ConversationEntry { role: Role::Assistant, content: String::new() });
        let ticket = RevealTicket { generation, index: self.entries.len() - 1 };
        self.in_progress = Some(ticket);
        Some(ticket)
    }

    /// Overwrite the in-progress entry. Returns `false` once the ticket is stale.
    pub fn apply_reveal(&mut self, ticket: RevealTicket, content: &str) -> bool {
        if !self.holds(ticket) {
            return false;
        }
        match self.entries.get_mut(ticket.index) {
            Some(entry) => {
                content.clone_into(&mut entry.content);
                true
            }
            None => false,
        }
    }

    /// Mark the reveal complete. Returns `false` if it was superseded.
    pub fn finish_reveal(&mut self, ticket: RevealTicket) -> bool {
        if !self.holds(ticket) {
            return false;
        }
        self.in_progress = None;
        true
    }

    /// End a reveal with an error line. An untouched placeholder becomes the
    /// error line; otherwise the partial content stays and the line is appended.
    pub fn fail_reveal(&mut self, ticket: RevealTicket, message: impl Into<String>) -> bool {
        if !self.finish_reveal(ticket) {
            return false;
        }
        let message = message.into();
        match self.entries.get_mut(ticket.index) {
            Some(entry) if entry.content.is_empty() => entry.content = message,
            _ => self.entries.push(ConversationEntry { role: Role::Assistant, content: message }),
        }
        true
    }

    /// Append a static assistant line, unless `generation` is stale.
    pub fn push_assistant(&mut self, generation: u64, content: impl Into<String>) -> bool {
        if !self.is_current(generation) || self.in_progress.is_some() {
            return false;
        }
        self.entries.push(ConversationEntry { role: Role::Assistant, content: content.into() });
        true
    }

    fn holds(&self, ticket: RevealTicket) -> bool {
        self.is_current(ticket.generation) && self.in_progress == Some(ticket)
    }
}

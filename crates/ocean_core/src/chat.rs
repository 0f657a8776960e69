use chrono::{DateTime, Utc};

pub type MessageId = u64;

pub const QUICK_QUERIES: [&str; 5] = [
    "Show temperature profiles for the North Atlantic",
    "What is the salinity range in the Pacific Ocean?",
    "Generate a T-S diagram for recent ARGO data",
    "Explain ocean acidification trends",
    "Compare temperature data across different depths",
];

const GREETING: &str = "Hello! I'm OceanGPT, your oceanographic AI assistant. I can help you \
analyze ocean data, answer questions about marine science, and generate visualizations from \
ARGO float data. What would you like to explore today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub sources: Option<Vec<String>>,
}

/// Text of the fabricated reply to `prompt`.
pub fn assistant_reply(prompt: &str) -> String {
    format!(
        "I understand you're asking about \"{prompt}\". This is a simulated response from \
         OceanGPT. In the real system, I would query the RAG pipeline to search oceanographic \
         literature, retrieve relevant ARGO float data from PostgreSQL, and provide \
         scientifically accurate information with proper citations and data visualizations."
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTurn {
    turn: MessageId,
    prompt: String,
}

/// Message log plus the submission guard of the conversational simulator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    input: String,
    in_flight: Option<PendingTurn>,
    last_id: MessageId,
}

impl ChatState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Appends the user turn and enters the in-flight state.
    ///
    /// Returns the turn id to schedule the reply for, or `None` when the input
    /// is blank or a reply is still pending. A rejected call changes nothing.
    pub(crate) fn submit(&mut self, at: DateTime<Utc>) -> Option<MessageId> {
        if self.input.trim().is_empty() || self.in_flight.is_some() {
            return None;
        }

        let prompt = std::mem::take(&mut self.input);
        let turn = self.next_id();
        self.messages.push(Message {
            id: turn,
            role: Role::User,
            content: prompt.clone(),
            timestamp: at,
            sources: None,
        });
        self.in_flight = Some(PendingTurn { turn, prompt });
        Some(turn)
    }

    /// Appends the assistant reply for `turn` and leaves the in-flight state.
    /// Returns false if `turn` is not the pending one.
    pub(crate) fn complete(
        &mut self,
        turn: MessageId,
        at: DateTime<Utc>,
        citations: &[String],
    ) -> bool {
        let Some(pending) = self.in_flight.take_if(|pending| pending.turn == turn) else {
            return false;
        };

        let id = self.next_id();
        self.messages.push(Message {
            id,
            role: Role::Assistant,
            content: assistant_reply(&pending.prompt),
            timestamp: at,
            sources: Some(citations.to_vec()),
        });
        true
    }

    pub(crate) fn push_greeting(&mut self, at: DateTime<Utc>) {
        let id = self.next_id();
        self.messages.push(Message {
            id,
            role: Role::Assistant,
            content: GREETING.to_string(),
            timestamp: at,
            sources: None,
        });
    }

    fn next_id(&mut self) -> MessageId {
        self.last_id += 1;
        self.last_id
    }
}

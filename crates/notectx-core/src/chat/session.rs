//! An in-memory chat session: history, model, and chain selection

use serde::Serialize;

use super::{window, ChatMessage};
use crate::config::Settings;
use crate::context::{ChainContext, ContextKind, ContextResolver, ContextSelector};
use crate::error::Result;
use crate::models::{ChainType, ChatModel};
use crate::notify::Notifier;
use crate::vault::Vault;

/// What the chain consumer receives when a chain is (re)initialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSetup {
    pub chain: ChainType,
    /// Resolved context for retrieval chains; `None` for plain chat
    pub context: Option<ChainContext>,
}

/// Conversation state for one chat panel
#[derive(Debug, Clone)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    model: &'static ChatModel,
    chain: ChainType,
    context_turns: usize,
}

impl ChatSession {
    pub fn new(model: &'static ChatModel, context_turns: usize) -> Self {
        ChatSession {
            history: Vec::new(),
            model,
            chain: ChainType::default(),
            context_turns,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut session = Self::new(settings.chat_model()?, settings.context_turns);
        session.chain = settings.chain;
        Ok(session)
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn model(&self) -> &'static ChatModel {
        self.model
    }

    pub fn set_model(&mut self, model: &'static ChatModel) {
        self.model = model;
    }

    pub fn chain(&self) -> ChainType {
        self.chain
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.history.push(message);
    }

    /// Drop the whole conversation
    pub fn new_chat(&mut self) {
        self.history.clear();
    }

    pub fn visible_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter().filter(|m| m.is_visible)
    }

    /// Recent exchanges handed to context-aware chains: two messages per
    /// configured turn, ending at the latest reply.
    pub fn chat_context(&self) -> &[ChatMessage] {
        window(&self.history, self.context_turns.saturating_mul(2))
    }

    /// Switch chains.
    ///
    /// Plain chat switches immediately. Retrieval QA first resolves the
    /// selected context; on success an AI message announcing the context is
    /// appended and the setup carries the content. On failure the user has
    /// already been notified once, the chain is left unchanged and `None` is
    /// returned.
    #[tracing::instrument(skip(self, selection, resolver))]
    pub fn select_chain<V, N>(
        &mut self,
        chain: ChainType,
        kind: ContextKind,
        search_key: &str,
        selection: Option<String>,
        resolver: &ContextResolver<'_, V, N>,
    ) -> Option<ChainSetup>
    where
        V: Vault + ?Sized,
        N: Notifier + ?Sized,
    {
        if chain != ChainType::RetrievalQa {
            self.chain = chain;
            return Some(ChainSetup {
                chain,
                context: None,
            });
        }

        let selector = match ContextSelector::from_parts(kind, search_key, selection) {
            Ok(selector) => selector,
            Err(err) => {
                resolver.report(&err);
                return None;
            }
        };

        let Some(context) = resolver.resolve(&selector) else {
            tracing::error!("No context found.");
            return None;
        };

        self.add_message(ChatMessage::ai(format!(
            "OK Feel free to ask me questions about {}.",
            context.name
        )));
        self.chain = chain;
        Some(ChainSetup {
            chain,
            context: Some(context),
        })
    }
}

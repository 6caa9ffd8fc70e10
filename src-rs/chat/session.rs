use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cons::provider_cons::{ChatProvider, PROVIDER_ORDER};
use crate::llm::models::provider_base::{Message, ProviderClient};
use crate::llm::models::provider_handle::AnyProviderClient;

use super::indicator::BusyIndicator;
use super::input::{read_menu_choice, read_multiline, CtrlC, MultilineInput};

const REPLY_DIVIDER: &str = "================================================";
const INPUT_HEADER: &str =
    "========================\nYou (empty line sends, Ctrl+C clears, Ctrl+D exits):";

/// Which histories receive this session's traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(ChatProvider),
    All,
}

impl Selection {
    /// Menu numbers: 1..=N pick a single provider in dispatch order,
    /// N+1 picks all of them. Provider names and "all" are accepted as
    /// typed alternatives. Anything else is invalid.
    pub fn parse(input: &str) -> Option<Selection> {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            if n == PROVIDER_ORDER.len() + 1 {
                return Some(Selection::All);
            }
            return PROVIDER_ORDER
                .get(n.checked_sub(1)?)
                .map(|&provider| Selection::One(provider));
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(Selection::All);
        }
        ChatProvider::from_name(trimmed).map(Selection::One)
    }

    pub fn includes(&self, provider: ChatProvider) -> bool {
        match self {
            Selection::All => true,
            Selection::One(p) => *p == provider,
        }
    }
}

pub fn is_quit_command(message: &str) -> bool {
    message.trim().eq_ignore_ascii_case("quit")
}

pub struct ProviderSlot<C> {
    pub provider: ChatProvider,
    pub client: C,
    pub history: Vec<Message>,
}

/// One interactive session: an independent append-only history per
/// provider, mutated only through the turn bookkeeping below.
pub struct ChatSession<C> {
    slots: Vec<ProviderSlot<C>>,
}

impl<C: ProviderClient> ChatSession<C> {
    pub fn new(clients: Vec<(ChatProvider, C)>) -> Self {
        let slots = clients
            .into_iter()
            .map(|(provider, client)| ProviderSlot {
                provider,
                client,
                history: Vec::new(),
            })
            .collect();
        Self { slots }
    }

    pub fn history(&self, provider: ChatProvider) -> Option<&[Message]> {
        self.slots
            .iter()
            .find(|slot| slot.provider == provider)
            .map(|slot| slot.history.as_slice())
    }

    /// Clones the user turn into every selected history, and only those.
    pub fn append_user(&mut self, selection: Selection, content: &str) {
        for slot in &mut self.slots {
            if selection.includes(slot.provider) {
                slot.history.push(Message::user(content));
            }
        }
    }

    /// Issues one completion call per selected provider, sequentially and
    /// in the fixed slot order. The first failure aborts the turn; no
    /// history is touched here either way.
    pub async fn dispatch(&self, selection: Selection) -> Result<Vec<(ChatProvider, String)>> {
        let selected = self
            .slots
            .iter()
            .filter(|slot| selection.includes(slot.provider));

        let mut replies = Vec::new();
        for slot in selected {
            log::debug!("dispatching turn to {}", slot.provider);
            let reply = slot.client.complete(&slot.history).await?;
            log::debug!("{} replied ({} chars)", slot.provider, reply.len());
            replies.push((slot.provider, reply));
        }
        Ok(replies)
    }

    /// Appends each reply to its own provider's history only.
    pub fn append_replies(&mut self, replies: &[(ChatProvider, String)]) {
        for (provider, reply) in replies {
            if let Some(slot) = self.slots.iter_mut().find(|s| s.provider == *provider) {
                slot.history.push(Message::assistant(reply.clone()));
            }
        }
    }
}

fn print_menu() {
    println!("Please choose an option:");
    for (i, provider) in PROVIDER_ORDER.iter().enumerate() {
        println!("{}: {}", i + 1, provider.display_name());
    }
    println!("{}: All", PROVIDER_ORDER.len() + 1);
    print!("Enter the number of your choice: ");
    let _ = std::io::stdout().flush();
}

/// Top-level interactive loop: provider selection, then turns until the
/// user quits back to the menu or ends input entirely.
pub async fn run(clients: Vec<(ChatProvider, AnyProviderClient)>) -> Result<()> {
    let mut session = ChatSession::new(clients);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interrupts = CtrlC;

    loop {
        print_menu();
        let Some(choice) = read_menu_choice(&mut lines, &mut interrupts).await? else {
            println!("\nExiting chat. Goodbye!");
            return Ok(());
        };
        let Some(selection) = Selection::parse(&choice) else {
            println!("Invalid choice. Please try again.");
            continue;
        };
        log::info!("selection: {:?}", selection);

        loop {
            let message = match read_multiline(&mut lines, &mut interrupts, INPUT_HEADER).await? {
                MultilineInput::Message(message) => message,
                MultilineInput::EndOfInput => {
                    println!("\nExiting chat. Goodbye!");
                    return Ok(());
                }
            };

            if is_quit_command(&message) {
                println!("Exiting chat. Goodbye!");
                break;
            }

            session.append_user(selection, &message);

            let indicator = BusyIndicator::start();
            let outcome = session.dispatch(selection).await;
            let replies = outcome?;
            indicator.stop().await;

            for (provider, reply) in &replies {
                println!("\n{}\n{}: {}", REPLY_DIVIDER, provider.display_name(), reply);
            }
            session.append_replies(&replies);
        }
    }
}

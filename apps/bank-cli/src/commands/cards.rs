//! Customer cards screen.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};

use springbank_core::routes::Route;
use springbank_shared::dto::{CardCreateRequest, CardResponse, CardType};

use crate::context::AppContext;

#[derive(Clone, Copy, ValueEnum)]
pub enum CardTypeArg {
    Debit,
    Credit,
}

impl From<CardTypeArg> for CardType {
    fn from(arg: CardTypeArg) -> Self {
        match arg {
            CardTypeArg::Debit => CardType::Debit,
            CardTypeArg::Credit => CardType::Credit,
        }
    }
}

#[derive(Subcommand)]
pub enum CardsCommand {
    /// List your cards
    List,
    /// Show one of your cards
    Show { id: i64 },
    /// Request a card for one of your accounts
    Create {
        #[arg(long)]
        account_number: String,
        #[arg(long, value_enum)]
        card_type: CardTypeArg,
    },
}

pub async fn run(ctx: &AppContext, command: CardsCommand) -> anyhow::Result<()> {
    ctx.ensure(Route::Cards).await?;

    match command {
        CardsCommand::List => {
            let cards = ctx.cards.my().await.context("could not load your cards")?;
            if cards.is_empty() {
                println!("no cards yet");
            }
            for card in &cards {
                print_card(card);
            }
        }
        CardsCommand::Show { id } => {
            let card = ctx
                .cards
                .my_by_id(id)
                .await
                .context("could not load the card")?;
            print_card(&card);
        }
        CardsCommand::Create {
            account_number,
            card_type,
        } => {
            let card = ctx
                .cards
                .create(&CardCreateRequest {
                    account_number,
                    card_type: card_type.into(),
                })
                .await
                .context("could not create the card")?;
            println!("card issued:");
            print_card(&card);
        }
    }
    Ok(())
}

pub fn print_card(card: &CardResponse) {
    println!(
        "#{:<4} {:<19} {:<6} [{}] account={}",
        card.id, card.card_number, card.card_type, card.status, card.account_number,
    );
}

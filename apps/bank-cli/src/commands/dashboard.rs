//! Customer home screen: accounts, cards and recent activity fetched
//! concurrently - all three must succeed before anything renders.

use anyhow::Context;

use springbank_core::routes::Route;

use crate::context::AppContext;

use super::{accounts::print_account, cards::print_card, transactions::print_transaction};

const RECENT_LIMIT: usize = 5;

pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.ensure(Route::Home).await?;

    let (accounts, cards, history) = tokio::try_join!(
        ctx.accounts.my(),
        ctx.cards.my(),
        ctx.transactions.my(),
    )
    .context("could not load the dashboard")?;

    let balance: f64 = accounts.iter().map(|a| a.balance).sum();
    println!("total balance: {balance:.2}");

    println!("\naccounts ({}):", accounts.len());
    for account in &accounts {
        print_account(account);
    }

    println!("\ncards ({}):", cards.len());
    for card in &cards {
        print_card(card);
    }

    println!("\nrecent activity:");
    for transaction in history.iter().take(RECENT_LIMIT) {
        print_transaction(transaction);
    }

    Ok(())
}

//! Customer accounts screen.

use anyhow::Context;
use clap::Subcommand;

use springbank_core::routes::Route;
use springbank_shared::dto::AccountResponse;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum AccountsCommand {
    /// List your accounts
    List,
    /// Show one of your accounts
    Show { id: i64 },
}

pub async fn run(ctx: &AppContext, command: AccountsCommand) -> anyhow::Result<()> {
    ctx.ensure(Route::Accounts).await?;

    match command {
        AccountsCommand::List => {
            let accounts = ctx
                .accounts
                .my()
                .await
                .context("could not load your accounts")?;
            if accounts.is_empty() {
                println!("no accounts yet");
            }
            for account in &accounts {
                print_account(account);
            }
        }
        AccountsCommand::Show { id } => {
            let account = ctx
                .accounts
                .my_by_id(id)
                .await
                .context("could not load the account")?;
            print_account(&account);
        }
    }
    Ok(())
}

pub fn print_account(account: &AccountResponse) {
    println!(
        "#{:<4} {:<20} {:<9} {:>12.2} {} [{}] owner={}",
        account.id,
        account.account_number,
        account.account_type,
        account.balance,
        account.currency,
        account.status,
        account.client_username,
    );
}

//! Back-office portal: every screen here is operator-guarded.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};

use springbank_core::routes::Route;
use springbank_shared::dto::{AccountCreateRequest, AccountType, ClientResponse};

use crate::context::AppContext;

use super::{accounts::print_account, cards::print_card, transactions::print_transaction};

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountTypeArg {
    Checking,
    Savings,
    Business,
}

impl From<AccountTypeArg> for AccountType {
    fn from(arg: AccountTypeArg) -> Self {
        match arg {
            AccountTypeArg::Checking => AccountType::Checking,
            AccountTypeArg::Savings => AccountType::Savings,
            AccountTypeArg::Business => AccountType::Business,
        }
    }
}

#[derive(Subcommand)]
pub enum OperatorCommand {
    /// Bank-wide overview
    Dashboard,
    #[command(subcommand)]
    Accounts(OperatorAccounts),
    #[command(subcommand)]
    Clients(OperatorClients),
    #[command(subcommand)]
    Cards(OperatorCards),
    #[command(subcommand)]
    Transactions(OperatorTransactions),
}

#[derive(Subcommand)]
pub enum OperatorAccounts {
    /// Every account in the bank
    List,
    Show {
        id: i64,
    },
    /// Look an account up by its account number
    Find {
        account_number: String,
    },
    /// Open an account for a client
    Create {
        #[arg(long)]
        client_id: i64,
        #[arg(long, value_enum)]
        account_type: AccountTypeArg,
    },
}

#[derive(Subcommand)]
pub enum OperatorClients {
    /// Every client on the books
    List,
    Show { id: i64 },
    /// Soft-disable a client
    Disable { id: i64 },
    /// Re-enable a previously disabled client
    Enable { id: i64 },
}

#[derive(Subcommand)]
pub enum OperatorCards {
    /// Every card in the bank
    List,
    Show { id: i64 },
    /// Retire a card
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum OperatorTransactions {
    /// The full transaction ledger
    List,
    /// Ledger entries touching one account
    Account { account_number: String },
}

pub async fn run(ctx: &AppContext, command: OperatorCommand) -> anyhow::Result<()> {
    match command {
        OperatorCommand::Dashboard => {
            ctx.ensure(Route::Operator).await?;
            let (accounts, clients, cards) = tokio::try_join!(
                ctx.accounts.all(),
                ctx.clients.all(),
                ctx.cards.all(),
            )
            .context("could not load the overview")?;
            println!(
                "{} accounts, {} clients, {} cards",
                accounts.len(),
                clients.len(),
                cards.len()
            );
        }
        OperatorCommand::Accounts(command) => {
            ctx.ensure(Route::OperatorAccounts).await?;
            accounts(ctx, command).await?;
        }
        OperatorCommand::Clients(command) => {
            ctx.ensure(Route::OperatorClients).await?;
            clients(ctx, command).await?;
        }
        OperatorCommand::Cards(command) => {
            ctx.ensure(Route::OperatorCards).await?;
            cards(ctx, command).await?;
        }
        OperatorCommand::Transactions(command) => {
            ctx.ensure(Route::OperatorTransactions).await?;
            transactions(ctx, command).await?;
        }
    }
    Ok(())
}

async fn accounts(ctx: &AppContext, command: OperatorAccounts) -> anyhow::Result<()> {
    match command {
        OperatorAccounts::List => {
            for account in &ctx.accounts.all().await.context("could not load accounts")? {
                print_account(account);
            }
        }
        OperatorAccounts::Show { id } => {
            print_account(&ctx.accounts.by_id(id).await.context("account not found")?);
        }
        OperatorAccounts::Find { account_number } => {
            let account = ctx
                .accounts
                .by_account_number(&account_number)
                .await
                .context("account not found")?;
            print_account(&account);
        }
        OperatorAccounts::Create {
            client_id,
            account_type,
        } => {
            let account = ctx
                .accounts
                .create(&AccountCreateRequest {
                    client_id,
                    account_type: account_type.into(),
                })
                .await
                .context("could not open the account")?;
            println!("account opened:");
            print_account(&account);
        }
    }
    Ok(())
}

async fn clients(ctx: &AppContext, command: OperatorClients) -> anyhow::Result<()> {
    match command {
        OperatorClients::List => {
            for client in &ctx.clients.all().await.context("could not load clients")? {
                print_client(client);
            }
        }
        OperatorClients::Show { id } => {
            print_client(&ctx.clients.by_id(id).await.context("client not found")?);
        }
        OperatorClients::Disable { id } => {
            ctx.clients
                .disable(id)
                .await
                .context("could not disable the client")?;
            println!("client {id} disabled");
        }
        OperatorClients::Enable { id } => {
            let client = ctx
                .clients
                .enable(id)
                .await
                .context("could not enable the client")?;
            println!("client {id} enabled");
            print_client(&client);
        }
    }
    Ok(())
}

async fn cards(ctx: &AppContext, command: OperatorCards) -> anyhow::Result<()> {
    match command {
        OperatorCards::List => {
            for card in &ctx.cards.all().await.context("could not load cards")? {
                print_card(card);
            }
        }
        OperatorCards::Show { id } => {
            print_card(&ctx.cards.by_id(id).await.context("card not found")?);
        }
        OperatorCards::Delete { id } => {
            ctx.cards
                .delete(id)
                .await
                .context("could not delete the card")?;
            println!("card {id} deleted");
        }
    }
    Ok(())
}

async fn transactions(ctx: &AppContext, command: OperatorTransactions) -> anyhow::Result<()> {
    let ledger = match command {
        OperatorTransactions::List => ctx.transactions.all().await,
        OperatorTransactions::Account { account_number } => {
            ctx.transactions.by_account(&account_number).await
        }
    }
    .context("could not load the ledger")?;

    for transaction in &ledger {
        print_transaction(transaction);
    }
    Ok(())
}

fn print_client(client: &ClientResponse) {
    println!(
        "#{:<4} {:<16} {} {} <{}> {} enabled={}",
        client.id,
        client.username,
        client.first_name,
        client.last_name,
        client.email,
        client.role,
        client.enabled,
    );
}

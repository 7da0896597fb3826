//! Transaction history, cash operations, and transfers.

use anyhow::Context;
use clap::{Args, Subcommand};

use springbank_core::routes::Route;
use springbank_shared::dto::{TransactionResponse, TransferRequest};

use crate::context::AppContext;

#[derive(Args)]
pub struct TransferArgs {
    /// Source account number
    #[arg(long)]
    pub from: String,
    /// Destination account number
    #[arg(long)]
    pub to: String,
    #[arg(long)]
    pub amount: f64,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// Your transaction history, optionally for a single account
    List {
        #[arg(long)]
        account: Option<String>,
    },
    /// Deposit cash into an account
    Deposit {
        #[arg(long)]
        account: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        description: Option<String>,
    },
    /// Withdraw cash from an account
    Withdraw {
        #[arg(long)]
        account: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        description: Option<String>,
    },
}

pub async fn transfer(ctx: &AppContext, args: TransferArgs) -> anyhow::Result<()> {
    ctx.ensure(Route::Transfer).await?;

    let posted = ctx
        .transactions
        .transfer(&TransferRequest {
            source_account_number: args.from,
            destination_account_number: args.to,
            amount: args.amount,
            description: args.description,
        })
        .await
        .context("transfer failed")?;

    println!("transfer posted:");
    print_transaction(&posted);
    Ok(())
}

pub async fn run(ctx: &AppContext, command: TransactionsCommand) -> anyhow::Result<()> {
    ctx.ensure(Route::Transactions).await?;

    match command {
        TransactionsCommand::List { account } => {
            let history = match account {
                Some(number) => ctx.transactions.by_account(&number).await,
                None => ctx.transactions.my().await,
            }
            .context("could not load transactions")?;

            if history.is_empty() {
                println!("no transactions yet");
            }
            for transaction in &history {
                print_transaction(transaction);
            }
        }
        TransactionsCommand::Deposit {
            account,
            amount,
            description,
        } => {
            let posted = ctx
                .transactions
                .deposit(&account, amount, description.as_deref())
                .await
                .context("deposit failed")?;
            println!("deposit posted:");
            print_transaction(&posted);
        }
        TransactionsCommand::Withdraw {
            account,
            amount,
            description,
        } => {
            let posted = ctx
                .transactions
                .withdraw(&account, amount, description.as_deref())
                .await
                .context("withdrawal failed")?;
            println!("withdrawal posted:");
            print_transaction(&posted);
        }
    }
    Ok(())
}

pub fn print_transaction(transaction: &TransactionResponse) {
    println!(
        "#{:<5} {:<10} {:>12.2}  {} -> {}  {}",
        transaction.id,
        transaction.transaction_type,
        transaction.amount,
        transaction.source_account_number.as_deref().unwrap_or("-"),
        transaction
            .destination_account_number
            .as_deref()
            .unwrap_or("-"),
        transaction.description.as_deref().unwrap_or(""),
    );
}

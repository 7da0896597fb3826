//! Command surface - each command stands in for a page of the original
//! front-end and runs behind the same route guard.

mod accounts;
mod auth;
mod cards;
mod dashboard;
mod operator;
mod transactions;

use clap::{Parser, Subcommand};

use crate::context::AppContext;

#[derive(Parser)]
#[command(name = "bank-cli")]
#[command(about = "SpringBank terminal front-end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in (customer portal, or back office with --operator)
    Login(auth::LoginArgs),
    /// Register a new customer
    Register(auth::RegisterArgs),
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// Customer home: accounts, cards and recent activity
    Dashboard,
    /// Your accounts
    #[command(subcommand)]
    Accounts(accounts::AccountsCommand),
    /// Your cards
    #[command(subcommand)]
    Cards(cards::CardsCommand),
    /// Move funds between accounts
    Transfer(transactions::TransferArgs),
    /// Transaction history and cash operations
    #[command(subcommand)]
    Transactions(transactions::TransactionsCommand),
    /// Back-office portal
    #[command(subcommand)]
    Operator(operator::OperatorCommand),
}

pub async fn dispatch(ctx: &AppContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => auth::login(ctx, args).await,
        Commands::Register(args) => auth::register(ctx, args).await,
        Commands::Logout => auth::logout(ctx).await,
        Commands::Whoami => auth::whoami(ctx).await,
        Commands::Dashboard => dashboard::run(ctx).await,
        Commands::Accounts(command) => accounts::run(ctx, command).await,
        Commands::Cards(command) => cards::run(ctx, command).await,
        Commands::Transfer(args) => transactions::transfer(ctx, args).await,
        Commands::Transactions(command) => transactions::run(ctx, command).await,
        Commands::Operator(command) => operator::run(ctx, command).await,
    }
}

//! Session commands: login, register, logout, whoami.

use anyhow::{Context, bail};
use clap::Args;

use springbank_shared::dto::{LoginRequest, RegisterRequest, Role};

use crate::context::AppContext;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    /// Sign in to the back office instead of the customer portal.
    #[arg(long)]
    pub operator: bool,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub address: String,
}

pub async fn login(ctx: &AppContext, args: LoginArgs) -> anyhow::Result<()> {
    let session = ctx
        .session
        .login(&LoginRequest {
            username: args.username,
            password: args.password,
        })
        .await
        .context("login failed")?;

    // The operator login screen only admits operator accounts; anyone
    // else is signed straight back out.
    if args.operator && session.role != Role::Operator {
        ctx.session.logout().await?;
        bail!("this account has no back-office access");
    }

    println!("signed in as {} ({})", session.username, session.role);
    Ok(())
}

pub async fn register(ctx: &AppContext, args: RegisterArgs) -> anyhow::Result<()> {
    let session = ctx
        .session
        .register(&RegisterRequest {
            username: args.username,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
            first_name: args.first_name,
            last_name: args.last_name,
            phone_number: args.phone_number,
            address: args.address,
        })
        .await
        .context("registration failed")?;

    println!("welcome, {} - you are signed in", session.username);
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    println!("signed out");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> anyhow::Result<()> {
    match ctx.session.current_user().await {
        Some(user) => println!(
            "{} <{}> role={} id={}",
            user.username, user.email, user.role, user.user_id
        ),
        None => println!("not signed in"),
    }
    Ok(())
}

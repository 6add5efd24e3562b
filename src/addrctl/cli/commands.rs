use super::render::{print_messages, render_address_table};
use super::setup::{AddressArgs, AddressCommands, Cli, Commands, CustomerArgs};
use addrctl::api::AddressInput;
use addrctl::error::Result;
use addrctl::init::{initialize, resolve_data_dir, AddrContext, HOME_ENV};
use addrctl::logging::setup_logging;
use addrctl::model::{AddressId, CustomerSelector};
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose)?;

    // Selector errors are reported without touching the store.
    let Commands::Address(cmd) = &cli.command;
    if let AddressCommands::Add { customer, .. }
    | AddressCommands::List { customer }
    | AddressCommands::RemoveAll { customer } = cmd
    {
        CustomerSelector::from_options(customer.customer_id, customer.customer_email.clone())?;
    }

    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(home)?;
    let mut ctx = initialize(&data_dir, cli.store.as_deref())?;

    match cli.command {
        Commands::Address(cmd) => match cmd {
            AddressCommands::Add { customer, fields } => handle_add(&mut ctx, customer, fields),
            AddressCommands::List { customer } => handle_list(&ctx, customer),
            AddressCommands::Remove { address_id } => handle_remove(&mut ctx, address_id),
            AddressCommands::RemoveAll { customer } => handle_remove_all(&mut ctx, customer),
        },
    }
}

fn handle_add(ctx: &mut AddrContext, customer: CustomerArgs, fields: AddressArgs) -> Result<()> {
    let result = ctx.api.add_address(
        customer.customer_id,
        customer.customer_email,
        AddressInput::from(fields),
    )?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AddrContext, customer: CustomerArgs) -> Result<()> {
    let result = ctx
        .api
        .list_addresses(customer.customer_id, customer.customer_email)?;
    if !result.listed_addresses.is_empty() {
        print!("{}", render_address_table(&result.listed_addresses));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AddrContext, address_id: AddressId) -> Result<()> {
    let result = ctx.api.remove_address(address_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove_all(ctx: &mut AddrContext, customer: CustomerArgs) -> Result<()> {
    let result = ctx
        .api
        .remove_all_addresses(customer.customer_id, customer.customer_email)?;
    print_messages(&result.messages);
    Ok(())
}

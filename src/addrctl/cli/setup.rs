use addrctl::api::AddressInput;
use addrctl::model::{AddressId, CustomerId};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrctl", bin_name = "addrctl", version)]
#[command(about = "Manage customer addresses from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this store document instead of the configured one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Customer address commands
    #[command(subcommand)]
    Address(AddressCommands),
}

#[derive(Subcommand, Debug)]
pub enum AddressCommands {
    /// Add a new address to a customer
    Add {
        #[command(flatten)]
        customer: CustomerArgs,

        #[command(flatten)]
        fields: AddressArgs,
    },

    /// List addresses of a customer
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        customer: CustomerArgs,
    },

    /// Remove a customer address by ID
    #[command(alias = "rm")]
    Remove {
        /// Address ID
        address_id: AddressId,
    },

    /// Remove all addresses of a specific customer
    RemoveAll {
        #[command(flatten)]
        customer: CustomerArgs,
    },
}

/// Customer selector; exactly one is expected, checked by the API.
#[derive(Args, Debug)]
pub struct CustomerArgs {
    /// Customer ID
    #[arg(long, alias = "customer_id", value_name = "ID")]
    pub customer_id: Option<CustomerId>,

    /// Customer email
    #[arg(long, alias = "customer_email", value_name = "EMAIL")]
    pub customer_email: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddressArgs {
    /// First name
    #[arg(long)]
    pub firstname: Option<String>,

    /// Last name
    #[arg(long)]
    pub lastname: Option<String>,

    /// Street line (repeat for additional lines)
    #[arg(long)]
    pub street: Vec<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Postcode
    #[arg(long)]
    pub postcode: Option<String>,

    /// Region ID or region name
    #[arg(long)]
    pub region: Option<String>,

    /// Country ID (e.g. US)
    #[arg(long)]
    pub country: Option<String>,

    /// Telephone
    #[arg(long)]
    pub telephone: Option<String>,

    /// Company
    #[arg(long)]
    pub company: Option<String>,

    /// Make this the default billing address
    #[arg(long, num_args = 0..=1, value_name = "VALUE")]
    pub default_billing: Option<Option<String>>,

    /// Make this the default shipping address
    #[arg(long, num_args = 0..=1, value_name = "VALUE")]
    pub default_shipping: Option<Option<String>>,
}

impl From<AddressArgs> for AddressInput {
    // The default flags only look at presence: `--default-billing=false` still sets it.
    fn from(args: AddressArgs) -> Self {
        Self {
            firstname: args.firstname,
            lastname: args.lastname,
            street: args.street,
            city: args.city,
            postcode: args.postcode,
            region: args.region,
            country_id: args.country,
            telephone: args.telephone,
            company: args.company,
            default_billing: args.default_billing.is_some(),
            default_shipping: args.default_shipping.is_some(),
        }
    }
}

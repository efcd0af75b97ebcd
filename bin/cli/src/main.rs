#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]

mod config;
mod output;

use std::{future::Future, str::FromStr, time::Duration};

use alloy::{
    providers::DynProvider,
    signers::{local::PrivateKeySigner, SignerSync},
};
use alloy_primitives::{keccak256, Address, Bytes, FixedBytes, B256, U256};
use anyhow::{anyhow, bail, Context as _, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use futures::StreamExt;
use tokio::signal;
use tracing::{info, warn};

use lsp_contracts::{
    constants::{
        INTERFACE_ID_ERC1271, INTERFACE_ID_ERC165, INTERFACE_ID_ERC725X, INTERFACE_ID_ERC725Y,
        INTERFACE_ID_LSP1,
    },
    events, keys, signing, ContractError, Erc725AccountClient, Operation, UniversalReceiverClient,
};
use lsp_logging::LogFormat;
use lsp_rpc::retry_operation;

use crate::{
    config::Settings,
    output::{print_receipt, print_table, EventRow, Field},
};

/// The well-known interfaces `supports-interface` checks when none is given.
const KNOWN_INTERFACES: [(&str, FixedBytes<4>); 5] = [
    ("ERC165", INTERFACE_ID_ERC165),
    ("ERC725X", INTERFACE_ID_ERC725X),
    ("ERC725Y", INTERFACE_ID_ERC725Y),
    ("ERC1271", INTERFACE_ID_ERC1271),
    ("LSP1", INTERFACE_ID_LSP1),
];

/// The CLI application that defines all available commands.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command. Each one overrides its `LSP_*` environment variable.
#[derive(Debug, Clone, clap::Args)]
struct GlobalArgs {
    /// The HTTP RPC URL of the node.
    #[arg(long, global = true)]
    rpc_url: Option<String>,
    /// The private key signing transactions.
    #[arg(long, global = true)]
    private_key: Option<String>,
    /// The log format: pretty, json or minimal.
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

/// The available commands that can be executed by the CLI.
#[derive(Subcommand)]
enum Commands {
    /// Deploy an ERC725Account.
    DeployAccount {
        /// The owner of the account. Defaults to the signer.
        #[arg(long)]
        owner: Option<Address>,
    },
    /// Deploy a BasicUniversalReceiver.
    DeployReceiver,
    /// Print the owner of a contract.
    Owner { address: Address },
    /// Read ERC725Y data keys.
    ///
    /// Keys are 0x prefixed hex, a name hashed with keccak256, `Name[]` for an array length or
    /// `First:Second` for a mapping key.
    GetData {
        address: Address,
        #[arg(required = true, value_parser = parse_key)]
        keys: Vec<B256>,
    },
    /// Write an ERC725Y data key.
    SetData {
        address: Address,
        #[arg(value_parser = parse_key)]
        key: B256,
        value: Bytes,
    },
    /// Execute a CALL, CREATE or CREATE2 on behalf of a contract.
    Execute {
        address: Address,
        /// CALL, CREATE2, CREATE or the numeric operation code.
        #[arg(long, default_value = "call")]
        operation: Operation,
        /// The target of a CALL. Required for CALL, ignored by CREATE and CREATE2.
        #[arg(long)]
        to: Option<Address>,
        /// The value in wei sent along.
        #[arg(long, default_value_t = U256::ZERO)]
        value: U256,
        /// The calldata of a CALL, or the creation code of a CREATE / CREATE2.
        #[arg(long, default_value_t = Bytes::new())]
        data: Bytes,
        /// The CREATE2 salt. Required for CREATE2.
        #[arg(long)]
        salt: Option<B256>,
    },
    /// Transfer the ownership of a contract.
    TransferOwnership { address: Address, new_owner: Address },
    /// Leave a contract without an owner.
    RenounceOwnership { address: Address },
    /// Check ERC165 interfaces. Checks the well-known ones when no interface is given.
    SupportsInterface {
        address: Address,
        /// An interface id or one of erc165, erc725x, erc725y, erc1271, lsp1.
        #[arg(value_parser = parse_interface)]
        interface: Option<FixedBytes<4>>,
    },
    /// Check a signature against an ERC725Account.
    IsValidSignature {
        address: Address,
        /// The signed hash.
        #[arg(long, conflicts_with = "message", required_unless_present = "message")]
        hash: Option<B256>,
        /// A message whose EIP-191 hash was signed.
        #[arg(long)]
        message: Option<String>,
        /// The 65 byte signature. Signs with the configured private key when omitted.
        #[arg(long)]
        signature: Option<Bytes>,
    },
    /// Notify a universal receiver.
    UniversalReceiver {
        address: Address,
        /// A 0x prefixed type id or a name hashed with keccak256, e.g. ERC777TokensRecipient.
        #[arg(value_parser = parse_type_id)]
        type_id: B256,
        #[arg(default_value_t = Bytes::new())]
        data: Bytes,
        /// Run through eth_call and print the returned value instead of sending a transaction.
        #[arg(long)]
        simulate: bool,
    },
    /// Send native value to an ERC725Account.
    SendValue { address: Address, value: U256 },
    /// Print the events a contract emitted in a block range.
    Events {
        address: Address,
        #[arg(long, default_value_t = 0)]
        from_block: u64,
        /// Defaults to the latest block.
        #[arg(long)]
        to_block: Option<u64>,
    },
    /// Follow the events a contract emits until interrupted.
    Watch {
        address: Address,
        /// Defaults to the latest block.
        #[arg(long)]
        from_block: Option<u64>,
    },
}

/// The connection shared by the commands.
struct Context {
    provider: DynProvider,
    signer: Option<PrivateKeySigner>,
    retry_timeout: Duration,
}

impl Context {
    fn new(args: &GlobalArgs, settings: &Settings) -> Result<Self> {
        let rpc_url = lsp_rpc::parse_rpc_url(args.rpc_url.as_deref().unwrap_or(&settings.rpc_url))?;
        let private_key = args.private_key.as_ref().or(settings.private_key.as_ref());
        let signer = private_key
            .map(|key| PrivateKeySigner::from_str(key).context("invalid private key"))
            .transpose()?;

        let provider = match &signer {
            Some(signer) => {
                lsp_rpc::connect_with_signer(rpc_url, signer.clone(), settings.poll_interval())
            }
            None => lsp_rpc::connect(rpc_url, settings.poll_interval()),
        };
        Ok(Self { provider, signer, retry_timeout: settings.retry_timeout() })
    }

    fn signer(&self) -> Result<&PrivateKeySigner> {
        self.signer.as_ref().ok_or_else(|| anyhow!("this command needs --private-key or LSP_PRIVATE_KEY"))
    }

    fn account(&self, address: Address) -> Erc725AccountClient<DynProvider> {
        Erc725AccountClient::load(address, self.provider.clone())
    }

    fn receiver(&self, address: Address) -> UniversalReceiverClient<DynProvider> {
        UniversalReceiverClient::load(address, self.provider.clone())
    }

    /// Runs a read, retrying transient RPC failures.
    async fn read<T, F, Fut>(&self, operation_name: &str, operation: F) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, ContractError>> + Send,
    {
        retry_operation(
            || {
                let fut = operation();
                async move { fut.await.map_err(read_error) }
            },
            Some(self.retry_timeout),
            operation_name,
        )
        .await
    }

    async fn ensure_contract(&self, address: Address) -> Result<()> {
        lsp_rpc::ensure_contract(&self.provider, address).await
    }
}

/// The `_to` of a CALL, which must be given explicitly so value is never sent to the zero address.
fn call_target(operation: Operation, to: Option<Address>) -> Result<Address> {
    to.ok_or_else(|| anyhow!("{operation} needs --to"))
}

/// Surfaces RPC transport failures unwrapped so the retry classification sees the error kind.
fn read_error(e: ContractError) -> anyhow::Error {
    match e.into_transport_error() {
        Ok(transport) => transport.into(),
        Err(other) => other.into(),
    }
}

/// Parses a data key: hex, `First:Second` mapping, or a name.
fn parse_key(s: &str) -> Result<B256, String> {
    if s.starts_with("0x") {
        return B256::from_str(s).map_err(|e| format!("invalid key {s}: {e}"));
    }
    if let Some((first, second)) = s.split_once(':') {
        return Ok(match Address::from_str(second) {
            Ok(address) => keys::mapping_key_with_address(first, address),
            Err(_) => keys::mapping_key(first, second),
        });
    }
    if s.ends_with("[]") {
        return Ok(keys::array_length_key(s));
    }
    Ok(keys::singleton_key(s))
}

fn parse_type_id(s: &str) -> Result<B256, String> {
    if s.starts_with("0x") {
        B256::from_str(s).map_err(|e| format!("invalid type id {s}: {e}"))
    } else {
        Ok(keccak256(s))
    }
}

fn parse_interface(s: &str) -> Result<FixedBytes<4>, String> {
    KNOWN_INTERFACES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, id)| *id)
        .map_or_else(
            || FixedBytes::<4>::from_str(s).map_err(|e| format!("invalid interface id {s}: {e}")),
            Ok,
        )
}

/// The main entry point for the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables.
    dotenv().ok();

    // Parse the arguments.
    let cli = Cli::parse();

    // Load configuration and initialize logging.
    let settings = Settings::new()?;
    lsp_logging::init(cli.global.log_format.unwrap_or(settings.log_format));

    let ctx = Context::new(&cli.global, &settings)?;
    run(cli.command, &ctx).await
}

#[allow(clippy::too_many_lines)]
async fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::DeployAccount { owner } => {
            let owner = owner.unwrap_or(ctx.signer()?.address());
            info!(%owner, "deploying ERC725Account");
            let account = Erc725AccountClient::deploy(ctx.provider.clone(), owner).await?;
            print_table(
                "ERC725Account",
                [Field::new("Address", account.address()), Field::new("Owner", owner)],
            );
        }
        Commands::DeployReceiver => {
            ctx.signer()?;
            let receiver = UniversalReceiverClient::deploy(ctx.provider.clone()).await?;
            print_table("BasicUniversalReceiver", [Field::new("Address", receiver.address())]);
        }
        Commands::Owner { address } => {
            ctx.ensure_contract(address).await?;
            let account = ctx.account(address);
            let owner = ctx.read("fetching owner", || account.owner()).await?;
            print_table("Owner", [Field::new("Owner", owner)]);
        }
        Commands::GetData { address, keys } => {
            ctx.ensure_contract(address).await?;
            let account = ctx.account(address);
            let values = ctx.read("fetching data", || account.get_data_many(&keys)).await?;
            let rows = keys.iter().zip(values).map(|(key, value)| Field::new(&key.to_string(), value));
            print_table("Data", rows);
        }
        Commands::SetData { address, key, value } => {
            ctx.signer()?;
            let receipt = ctx.account(address).set_data(key, value).await?;
            print_receipt("setData", &receipt, vec![Field::new("Key", key)]);
        }
        Commands::Execute { address, operation, to, value, data, salt } => {
            ctx.signer()?;
            let account = ctx.account(address);
            let (receipt, created) = match operation {
                Operation::Create2 => {
                    let salt = salt.ok_or_else(|| anyhow!("CREATE2 needs --salt"))?;
                    let (receipt, created) = account.create2(&data, salt, value).await?;
                    (receipt, Some(created))
                }
                Operation::Create => {
                    let (receipt, created) = account.create(data, value).await?;
                    (receipt, Some(created))
                }
                _ => {
                    let to = call_target(operation, to)?;
                    (account.execute(operation, to, value, data).await?, None)
                }
            };
            let extra = created.map(|created| Field::new("Created", created)).into_iter().collect();
            print_receipt(&format!("execute ({operation})"), &receipt, extra);
        }
        Commands::TransferOwnership { address, new_owner } => {
            ctx.signer()?;
            let receipt = ctx.account(address).transfer_ownership(new_owner).await?;
            print_receipt("transferOwnership", &receipt, vec![Field::new("New Owner", new_owner)]);
        }
        Commands::RenounceOwnership { address } => {
            ctx.signer()?;
            let receipt = ctx.account(address).renounce_ownership().await?;
            print_receipt("renounceOwnership", &receipt, Vec::new());
        }
        Commands::SupportsInterface { address, interface } => {
            ctx.ensure_contract(address).await?;
            let account = ctx.account(address);
            let checks: Vec<(String, FixedBytes<4>)> = match interface {
                Some(id) => vec![(id.to_string(), id)],
                None => KNOWN_INTERFACES.iter().map(|(name, id)| (format!("{name} ({id})"), *id)).collect(),
            };
            let mut rows = Vec::with_capacity(checks.len());
            for (name, id) in checks {
                let supported =
                    ctx.read("checking interface", || account.supports_interface(id)).await?;
                rows.push(Field::new(&name, supported));
            }
            print_table("Interfaces", rows);
        }
        Commands::IsValidSignature { address, hash, message, signature } => {
            let hash = match (hash, message) {
                (Some(hash), _) => hash,
                (None, Some(message)) => signing::eth_message_hash(message.as_bytes()),
                (None, None) => bail!("either --hash or --message is required"),
            };
            let signature = match signature {
                Some(signature) => signature,
                None => Bytes::from(ctx.signer()?.sign_hash_sync(&hash)?.as_bytes()),
            };

            ctx.ensure_contract(address).await?;
            let account = ctx.account(address);
            let result = ctx
                .read("checking signature", || account.is_valid_signature(hash, signature.clone()))
                .await?;
            let owner = ctx.read("fetching owner", || account.owner()).await?;
            let local = match signing::verify_owner_signature(owner, hash, &signature) {
                Ok(value) => value.to_string(),
                Err(e) => e.to_string(),
            };

            print_table(
                "isValidSignature",
                [
                    Field::new("Hash", hash),
                    Field::new("Result", result),
                    Field::new("Valid", signing::is_magic_value(result)),
                    Field::new("Owner", owner),
                    Field::new("Expected For Owner", local),
                ],
            );
        }
        Commands::UniversalReceiver { address, type_id, data, simulate } => {
            let receiver = ctx.receiver(address);
            if simulate {
                let returned = ctx
                    .read("simulating universalReceiver", || {
                        receiver.simulate_universal_receiver(type_id, data.clone())
                    })
                    .await?;
                print_table(
                    "universalReceiver",
                    [Field::new("Type Id", type_id), Field::new("Returned", returned)],
                );
            } else {
                ctx.signer()?;
                let receipt = receiver.universal_receiver(type_id, data).await?;
                print_receipt("universalReceiver", &receipt, vec![Field::new("Type Id", type_id)]);
            }
        }
        Commands::SendValue { address, value } => {
            ctx.signer()?;
            let receipt = ctx.account(address).send_value(value).await?;
            print_receipt("sendValue", &receipt, vec![Field::new("Value", value)]);
        }
        Commands::Events { address, from_block, to_block } => {
            let events = ctx
                .read("fetching events", || {
                    events::query_all(&ctx.provider, address, from_block, to_block)
                })
                .await?;
            print_table("Events", events.iter().map(EventRow::from));
        }
        Commands::Watch { address, from_block } => {
            let from_block = match from_block {
                Some(block) => block,
                None => lsp_rpc::fetch_block_number(&ctx.provider).await?,
            };
            watch(ctx, address, from_block).await?;
        }
    }

    Ok(())
}

async fn watch(ctx: &Context, address: Address, from_block: u64) -> Result<()> {
    let mut stream = events::watch_all(&ctx.provider, address, from_block).await?;
    info!(%address, from_block, "watching events, press ctrl-c to stop");

    loop {
        tokio::select! {
            item = stream.next() => match item {
                Some(Ok(decoded)) => {
                    let row = EventRow::from(&decoded);
                    info!(block = %row.block, tx = %row.tx_hash, event = %row.event, "{}", decoded.event.name());
                }
                Some(Err(e)) => warn!("failed to decode event: {e}"),
                None => {
                    warn!("event stream ended");
                    break;
                }
            },
            _ = signal::ctrl_c() => {
                warn!("ctrl-c received, shutting down");
                break;
            }
        }
    }
    Ok(())
}

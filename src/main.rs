use anyhow::Result;
use clap::Parser;

use netident::{IdentityConfig, IdentityService, LocalScanPolicy, SystemStack};

#[derive(Parser)]
#[command(name = "netident")]
#[command(about = "Print the network identity this machine announces to peers.")]
struct CommandLine {
    /// Service port to pair with the announced host
    #[arg(short, long, default_value_t = IdentityConfig::DEFAULT_PORT)]
    port: u16,
    /// Let a non-loopback IPv4 interface win over an earlier IPv6 one
    #[arg(long)]
    prefer_ipv4: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CommandLine::parse();

    let policy = if args.prefer_ipv4 {
        LocalScanPolicy::PreferIpv4
    } else {
        LocalScanPolicy::FirstMatch
    };
    let service = IdentityService::new(SystemStack).with_policy(policy);

    log::info!("Resolving network identity (policy: {:?})", policy);
    let identity = service.resolve_identity(i32::from(args.port))?;
    log::info!("Announcing {}", identity.endpoint);

    let json = if args.pretty {
        serde_json::to_string_pretty(&identity)?
    } else {
        serde_json::to_string(&identity)?
    };
    println!("{json}");

    Ok(())
}

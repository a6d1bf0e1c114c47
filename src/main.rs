/*!
 * netemu CLI - Command Line Interface
 */

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use netemu::{
    cli_style::{
        config_groups_table, hooks_table, links_table, location_table, nodes_table, print_error,
        print_info, print_success, print_warning, section_header, service_groups_table,
        sessions_table,
    },
    config::{ClientConfig, LogLevel},
    error::{NetemuError, EXIT_FATAL, EXIT_SUCCESS},
    logging,
    service_update::ServiceUpdater,
    session, Topology,
};
use netemu_connect::model::SessionState;
use netemu_connect::{CoreConnection, GrpcCoreApi, SessionClient};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netemu")]
#[command(version, about = "Drive CORE network emulation sessions over gRPC", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// CORE daemon address [default: localhost]
    #[arg(short = 'a', long = "address", global = true)]
    address: Option<String>,

    /// CORE daemon gRPC port [default: 50051]
    #[arg(short = 'p', long = "port", global = true)]
    port: Option<u16>,

    /// Log level
    #[arg(long = "log-level", value_enum, global = true)]
    log_level: Option<LogLevelArg>,

    /// Write JSON logs to this file
    #[arg(long = "log", value_name = "FILE", global = true)]
    log: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sessions on the daemon
    Sessions,

    /// Create an empty session
    Create,

    /// Delete a session
    Delete { session: i32 },

    /// Show the nodes and links of a session
    Show {
        session: i32,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a topology file into a session and instantiate it
    Start {
        /// Topology file (.toml or .json)
        #[arg(short = 't', long = "topology", value_name = "FILE")]
        topology: PathBuf,

        /// Add to this session instead of creating a new one
        #[arg(short = 's', long = "session")]
        session: Option<i32>,
    },

    /// Shut a session down
    Stop { session: i32 },

    /// Move a session to another state
    State {
        session: i32,

        /// DEFINITION, CONFIGURATION, INSTANTIATION, RUNTIME, DATACOLLECT or SHUTDOWN
        state: SessionState,
    },

    /// List the hooks of a session
    Hooks { session: i32 },

    /// Show session options
    Options { session: i32 },

    /// List the services the daemon offers
    Services,

    /// Show the geographic reference point of a session
    Location { session: i32 },

    /// Save a session as CORE XML
    Save {
        session: i32,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Open a CORE XML file as a new session
    Open {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Rewrite a legacy service definition for current daemons
    ServiceUpdate {
        /// Service file to update; the result is written to FILE.update
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let netemu_error = e.downcast_ref::<NetemuError>();
            let hint = netemu_error
                .filter(|err| err.is_connection_error())
                .map(|_| "Is the CORE daemon running? Check --address and --port.");
            print_error(&format!("{:#}", e), hint);
            netemu_error.map_or(EXIT_FATAL, NetemuError::exit_code)
        }
    };
    std::process::exit(code);
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ClientConfig::from_file(path).unwrap_or_else(|e| {
            print_warning(&format!("Failed to load config file: {}", e));
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    }
    .with_overrides(cli.address.clone(), cli.port, cli.verbose);
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if cli.log.is_some() {
        config.log_file = cli.log.clone();
    }

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    // Commands that never talk to the daemon
    match cli.command {
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            use clap_complete::generate;
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "netemu", &mut std::io::stdout());
            return Ok(());
        }
        Commands::ServiceUpdate { ref file } => {
            let updater = ServiceUpdater::new().context("Failed to compile service rules")?;
            let target = updater
                .update_file(file)
                .with_context(|| format!("Failed to update {}", file.display()))?;
            print_success(&format!("Updated service written to {}", target.display()));
            return Ok(());
        }
        _ => {}
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        // Channel construction needs a running runtime
        let connection = CoreConnection::connect(config.address.clone(), config.port)
            .map_err(NetemuError::from)?;
        handle_command(cli.command, &connection.client()).await
    })
}

async fn handle_command(
    command: Commands,
    client: &SessionClient<GrpcCoreApi>,
) -> anyhow::Result<()> {
    match command {
        Commands::Sessions => {
            let sessions = client.list_sessions().await.map_err(NetemuError::from)?;
            if sessions.is_empty() {
                print_info("No sessions");
            } else {
                println!("{}", sessions_table(&sessions));
            }
        }
        Commands::Create => {
            let ctx = client.create_session().await.map_err(NetemuError::from)?;
            print_success(&format!("Created session {} ({})", ctx.id, ctx.state));
        }
        Commands::Delete { session } => {
            session::delete(client, session).await?;
            print_success(&format!("Deleted session {}", session));
        }
        Commands::Show { session, json } => {
            let snapshot = client.get_session(session).await.map_err(NetemuError::from)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                section_header(&format!("Session {} ({})", snapshot.id, snapshot.state));
                println!("{}", nodes_table(&snapshot.nodes));
                if !snapshot.links.is_empty() {
                    println!("{}", links_table(&snapshot.links));
                }
            }
        }
        Commands::Start { topology, session } => {
            let topology = Topology::from_file(&topology)?;
            if topology.is_empty() {
                print_warning("Topology is empty; the session will start without nodes");
            }
            let ctx = session::start(client, session, &topology).await?;
            print_success(&format!(
                "Session {} started with {} nodes and {} links",
                ctx.id,
                topology.nodes.len(),
                topology.links.len()
            ));
        }
        Commands::Stop { session } => {
            session::stop(client, session).await?;
            print_success(&format!("Session {} shut down", session));
        }
        Commands::State { session, state } => {
            let ctx = session::set_state(client, session, state).await?;
            print_success(&format!("Session {} is now {}", ctx.id, ctx.state));
        }
        Commands::Hooks { session } => {
            let ctx = session::attach(client, session).await?;
            let hooks = client.get_hooks(&ctx).await.map_err(NetemuError::from)?;
            println!("{}", hooks_table(&hooks));
        }
        Commands::Options { session } => {
            let ctx = session::attach(client, session).await?;
            let groups = client
                .get_session_options(&ctx)
                .await
                .map_err(NetemuError::from)?;
            println!("{}", config_groups_table(&groups));
        }
        Commands::Services => {
            let groups = client.get_services().await.map_err(NetemuError::from)?;
            println!("{}", service_groups_table(&groups));
        }
        Commands::Location { session } => {
            let ctx = session::attach(client, session).await?;
            let location = client.get_location(&ctx).await.map_err(NetemuError::from)?;
            println!("{}", location_table(&location));
        }
        Commands::Save { session, file } => {
            let written = session::save_xml(client, session, &file).await?;
            print_success(&format!(
                "Saved session {} to {} ({} bytes)",
                session,
                file.display(),
                written
            ));
        }
        Commands::Open { file } => {
            let id = session::open_xml(client, &file).await?;
            print_success(&format!("Opened {} as session {}", file.display(), id));
        }
        Commands::ServiceUpdate { .. } | Commands::Completions { .. } => {}
    }
    Ok(())
}

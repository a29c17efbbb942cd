//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// GameSocial command-line client.
#[derive(Parser, Debug)]
#[command(name = "social", version, about)]
pub struct Cli {
    /// Backend base URL (overrides config file and SOCIAL_API_BASE).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
    #[arg(long, default_value_t = 50)]
    pub limit: u64,
    /// Opaque cursor (cursor/limit backends only).
    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with a WeChat openId and persist the session.
    Login {
        open_id: String,
    },
    /// Discard the local session.
    Logout,
    /// Show profile, points balance, and VIP status.
    Me,
    /// Edit my nickname and avatar.
    EditProfile {
        #[arg(long, default_value = "")]
        nickname: String,
        #[arg(long, default_value = "")]
        avatar_url: String,
    },
    /// List active tasks.
    Tasks,
    /// Perform the daily check-in.
    Checkin,
    /// Claim the reward of a completed task.
    Claim {
        task_code: String,
    },
    /// List redeemable goods.
    Shop(PageArgs),
    /// Show one shop item.
    Goods {
        id: u64,
    },
    /// Points balance and ledger.
    #[command(subcommand)]
    Points(PointsCommand),
    /// Show VIP status.
    Vip,
    /// Redemption orders.
    #[command(subcommand)]
    Redeem(RedeemCommand),
    /// Tournaments.
    #[command(subcommand)]
    Tournaments(TournamentCommand),
    /// Upload a file to the media store.
    Upload {
        file: PathBuf,
    },
    /// Show or edit the client configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Admin surface.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand, Debug)]
pub enum PointsCommand {
    /// Show the points balance.
    Balance,
    /// List ledger entries.
    Ledgers(PageArgs),
}

#[derive(Subcommand, Debug)]
pub enum RedeemCommand {
    /// List my redemption orders.
    List(PageArgs),
    /// Show one order.
    Get { id: u64 },
    /// Redeem one item.
    Create {
        #[arg(long)]
        goods_id: u64,
        #[arg(long, default_value_t = 1)]
        quantity: i32,
        #[arg(long)]
        points_price: i64,
    },
    /// Cancel an order.
    Cancel { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum TournamentCommand {
    /// List published tournaments.
    List(PageArgs),
    /// List tournaments I joined.
    Joined(PageArgs),
    /// Show one tournament.
    Get { id: u64 },
    /// Join a tournament.
    Join { id: u64 },
    /// Withdraw my enrollment.
    Cancel { id: u64 },
    /// Show the leaderboard and my own row.
    Results {
        id: u64,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration.
    Show,
    /// Persist a new base URL.
    SetBaseUrl { url: String },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Admin login.
    Login {
        username: String,
        password: String,
    },
    /// Show the admin identity.
    Me,
    /// Admin logout.
    Logout,
    /// Goods management.
    #[command(subcommand)]
    Goods(CrudCommand),
    /// Tournament management.
    #[command(subcommand)]
    Tournaments(TournamentAdminCommand),
    /// Task definition management.
    #[command(subcommand)]
    TaskDefs(CrudCommand),
    /// User management.
    #[command(subcommand)]
    Users(UserAdminCommand),
    /// Redemption order management.
    #[command(subcommand)]
    Orders(OrderAdminCommand),
    /// Adjust a user's points balance.
    PointsAdjust {
        #[arg(long)]
        user_id: u64,
        /// Signed amount to add to the balance.
        #[arg(long, allow_hyphen_values = true)]
        amount: i64,
        #[arg(long, default_value = "")]
        remark: String,
    },
    /// List audit log rows.
    Audit(PageArgs),
    /// Upload a file to the media store.
    Upload {
        file: PathBuf,
    },
}

/// Generic CRUD subcommands; create/update take the backend JSON payload.
#[derive(Subcommand, Debug)]
pub enum CrudCommand {
    List(PageArgs),
    Get { id: u64 },
    Create {
        /// JSON payload, e.g. '{"name": "...", "pointsPrice": 100, ...}'
        json: String,
    },
    Update {
        id: u64,
        json: String,
    },
    Delete { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum TournamentAdminCommand {
    #[command(flatten)]
    Crud(CrudCommand),
    /// Publish final results.
    PublishResults { id: u64 },
    /// Grant awards of a finished tournament.
    GrantAwards { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum UserAdminCommand {
    List(PageArgs),
    Get { id: u64 },
    Update {
        id: u64,
        /// JSON payload, e.g. '{"nickname": "...", "status": 1}'
        json: String,
    },
    /// Record a drink consumption.
    DrinksUse { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum OrderAdminCommand {
    List(PageArgs),
    Get { id: u64 },
    /// Counter redemption on a user's behalf.
    Create {
        #[arg(long)]
        user_id: u64,
        #[arg(long)]
        goods_id: u64,
        #[arg(long, default_value_t = 1)]
        quantity: i32,
        #[arg(long)]
        points_price: i64,
    },
    /// Mark an order as used (picked up).
    Use { id: u64 },
    Cancel { id: u64 },
}

impl PageArgs {
    pub fn to_query(&self) -> social_core::models::PageQuery {
        let mut page = social_core::models::PageQuery::new(self.offset, self.limit);
        if let Some(cursor) = &self.cursor {
            page = page.with_cursor(cursor.clone());
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::parse_from(["social", "login", "o-123"]);
        assert!(matches!(cli.command, Command::Login { ref open_id } if open_id == "o-123"));
    }

    #[test]
    fn test_parse_admin_points_adjust_negative_amount() {
        let cli = Cli::parse_from([
            "social", "admin", "points-adjust", "--user-id", "7", "--amount", "-50",
        ]);
        match cli.command {
            Command::Admin(AdminCommand::PointsAdjust { user_id, amount, .. }) => {
                assert_eq!(user_id, 7);
                assert_eq!(amount, -50);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_page_args_to_query() {
        let cli = Cli::parse_from(["social", "shop", "--offset", "10", "--limit", "5"]);
        match cli.command {
            Command::Shop(page) => {
                let query = page.to_query();
                assert_eq!(query.offset, 10);
                assert_eq!(query.limit, 5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

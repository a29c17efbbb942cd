//! GameSocial command-line client.
//!
//! Each subcommand is a stateless pass-through: build the payload, call the
//! API facade, print the result. Failures surface as a single toast-style
//! line; nothing is retried.

mod cli;
mod output;

use clap::Parser;
use cli::{
    AdminCommand, Cli, Command, ConfigCommand, CrudCommand, OrderAdminCommand, PointsCommand,
    RedeemCommand, TournamentAdminCommand, TournamentCommand, UserAdminCommand,
};
use output::{print_error, print_json, print_ok};
use serde_json::json;
use social_client::ApiClient;
use social_core::models::{
    AdminUserUpdate, CreateOrderItem, CreateOrderRequest, GoodsInput, PointsAdjustRequest,
    TaskDefInput, TournamentInput, UpdateProfileRequest,
};
use social_core::{Result, SocialError};
use social_infrastructure::{load_config, save_config, FileSessionStore};
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        print_error(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    if let Command::Config(command) = &cli.command {
        return run_config(command, config);
    }

    let store = Arc::new(FileSessionStore::new()?);
    let client = ApiClient::new(config, store)?;

    match cli.command {
        Command::Login { open_id } => {
            let result = client.wechat_login(&open_id).await?;
            print_ok("登录成功");
            print_json(&result.user);
        }
        Command::Logout => {
            client.logout()?;
            print_ok("已退出登录");
        }
        Command::Me => {
            // Profile, balance, and VIP status write disjoint fields, so the
            // three requests run concurrently and join before rendering.
            let (profile, balance, vip) = tokio::join!(
                client.me(),
                client.points_balance(),
                client.vip_status()
            );
            let profile = profile?;
            let balance = balance.unwrap_or_else(|e| {
                warn!("balance unavailable: {}", e);
                Default::default()
            });
            let vip = vip.unwrap_or_else(|e| {
                warn!("vip status unavailable: {}", e);
                Default::default()
            });
            print_json(&json!({"user": profile, "points": balance, "vip": vip}));
        }
        Command::EditProfile {
            nickname,
            avatar_url,
        } => {
            let updated = client
                .update_me(&UpdateProfileRequest {
                    nickname,
                    avatar_url,
                })
                .await?;
            print_ok("资料已更新");
            print_json(&updated);
        }
        Command::Tasks => print_json(&client.tasks().await?),
        Command::Checkin => {
            client.checkin().await?;
            print_ok("打卡成功");
        }
        Command::Claim { task_code } => {
            client.claim_task(&task_code).await?;
            print_ok("领取成功");
        }
        Command::Shop(page) => print_json(&client.list_goods(&page.to_query()).await?),
        Command::Goods { id } => print_json(&client.get_goods(id).await?),
        Command::Points(command) => match command {
            PointsCommand::Balance => print_json(&client.points_balance().await?),
            PointsCommand::Ledgers(page) => {
                print_json(&client.points_ledgers(&page.to_query()).await?)
            }
        },
        Command::Vip => print_json(&client.vip_status().await?),
        Command::Redeem(command) => run_redeem(&client, command).await?,
        Command::Tournaments(command) => run_tournaments(&client, command).await?,
        Command::Upload { file } => print_json(&client.upload_media(&file).await?),
        Command::Config(_) => unreachable!("handled above"),
        Command::Admin(command) => run_admin(&client, command).await?,
    }

    Ok(())
}

fn run_config(command: &ConfigCommand, effective: social_core::config::ClientConfig) -> Result<()> {
    match command {
        ConfigCommand::Show => print_json(&effective),
        ConfigCommand::SetBaseUrl { url } => {
            let mut config = load_config()?;
            config.base_url = url.trim_end_matches('/').to_string();
            save_config(&config)?;
            print_ok("配置已保存");
        }
    }
    Ok(())
}

async fn run_redeem(client: &ApiClient, command: RedeemCommand) -> Result<()> {
    match command {
        RedeemCommand::List(page) => print_json(&client.redeem_orders(&page.to_query()).await?),
        RedeemCommand::Get { id } => print_json(&client.redeem_order(id).await?),
        RedeemCommand::Create {
            goods_id,
            quantity,
            points_price,
        } => {
            let order = client
                .create_redeem_order(vec![CreateOrderItem {
                    goods_id,
                    quantity,
                    points_price,
                }])
                .await?;
            print_ok("兑换成功");
            print_json(&order);
        }
        RedeemCommand::Cancel { id } => {
            client.cancel_redeem_order(id).await?;
            print_ok("订单已取消");
        }
    }
    Ok(())
}

async fn run_tournaments(client: &ApiClient, command: TournamentCommand) -> Result<()> {
    match command {
        TournamentCommand::List(page) => {
            print_json(&client.list_tournaments(&page.to_query()).await?)
        }
        TournamentCommand::Joined(page) => {
            print_json(&client.joined_tournaments(&page.to_query()).await?)
        }
        TournamentCommand::Get { id } => print_json(&client.tournament(id).await?),
        TournamentCommand::Join { id } => {
            client.join_tournament(id).await?;
            print_ok("报名成功");
        }
        TournamentCommand::Cancel { id } => {
            client.cancel_tournament_join(id).await?;
            print_ok("已取消报名");
        }
        TournamentCommand::Results { id, page } => {
            print_json(&client.tournament_results(id, &page.to_query()).await?)
        }
    }
    Ok(())
}

async fn run_admin(client: &ApiClient, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Login { username, password } => {
            let result = client.admin_login(&username, &password).await?;
            print_ok("登录成功");
            print_json(&result.user);
        }
        AdminCommand::Me => print_json(&client.admin_me().await?),
        AdminCommand::Logout => {
            client.admin_logout().await?;
            print_ok("已退出登录");
        }
        AdminCommand::Goods(command) => match command {
            CrudCommand::List(page) => {
                print_json(&client.admin_list_goods(&page.to_query(), None).await?)
            }
            CrudCommand::Get { id } => print_json(&client.admin_get_goods(id).await?),
            CrudCommand::Create { json } => {
                let input: GoodsInput = parse_payload(&json)?;
                print_json(&client.admin_create_goods(&input).await?);
            }
            CrudCommand::Update { id, json } => {
                let input: GoodsInput = parse_payload(&json)?;
                client.admin_update_goods(id, &input).await?;
                print_ok("已更新");
            }
            CrudCommand::Delete { id } => {
                client.admin_delete_goods(id).await?;
                print_ok("已删除");
            }
        },
        AdminCommand::Tournaments(command) => match command {
            TournamentAdminCommand::Crud(CrudCommand::List(page)) => {
                print_json(&client.admin_list_tournaments(&page.to_query()).await?)
            }
            TournamentAdminCommand::Crud(CrudCommand::Get { id }) => {
                print_json(&client.admin_get_tournament(id).await?)
            }
            TournamentAdminCommand::Crud(CrudCommand::Create { json }) => {
                let input: TournamentInput = parse_payload(&json)?;
                print_json(&client.admin_create_tournament(&input).await?);
            }
            TournamentAdminCommand::Crud(CrudCommand::Update { id, json }) => {
                let input: TournamentInput = parse_payload(&json)?;
                client.admin_update_tournament(id, &input).await?;
                print_ok("已更新");
            }
            TournamentAdminCommand::Crud(CrudCommand::Delete { id }) => {
                client.admin_delete_tournament(id).await?;
                print_ok("已删除");
            }
            TournamentAdminCommand::PublishResults { id } => {
                client.admin_publish_results(id).await?;
                print_ok("成绩已发布");
            }
            TournamentAdminCommand::GrantAwards { id } => {
                client.admin_grant_awards(id).await?;
                print_ok("奖励已发放");
            }
        },
        AdminCommand::TaskDefs(command) => match command {
            CrudCommand::List(page) => {
                print_json(&client.admin_list_task_defs(&page.to_query(), None).await?)
            }
            CrudCommand::Get { id } => print_json(&client.admin_get_task_def(id).await?),
            CrudCommand::Create { json } => {
                let input: TaskDefInput = parse_payload(&json)?;
                print_json(&client.admin_create_task_def(&input).await?);
            }
            CrudCommand::Update { id, json } => {
                let input: TaskDefInput = parse_payload(&json)?;
                client.admin_update_task_def(id, &input).await?;
                print_ok("已更新");
            }
            CrudCommand::Delete { id } => {
                client.admin_delete_task_def(id).await?;
                print_ok("已删除");
            }
        },
        AdminCommand::Users(command) => match command {
            UserAdminCommand::List(page) => {
                print_json(&client.admin_list_users(&page.to_query()).await?)
            }
            UserAdminCommand::Get { id } => print_json(&client.admin_get_user(id).await?),
            UserAdminCommand::Update { id, json } => {
                let update: AdminUserUpdate = parse_payload(&json)?;
                client.admin_update_user(id, &update).await?;
                print_ok("已更新");
            }
            UserAdminCommand::DrinksUse { id } => {
                client.admin_use_drinks(id).await?;
                print_ok("已核销");
            }
        },
        AdminCommand::Orders(command) => match command {
            OrderAdminCommand::List(page) => {
                print_json(&client.admin_list_redeem_orders(&page.to_query()).await?)
            }
            OrderAdminCommand::Get { id } => print_json(&client.admin_get_redeem_order(id).await?),
            OrderAdminCommand::Create {
                user_id,
                goods_id,
                quantity,
                points_price,
            } => {
                let request = CreateOrderRequest::for_user(
                    user_id,
                    vec![CreateOrderItem {
                        goods_id,
                        quantity,
                        points_price,
                    }],
                );
                print_json(&client.admin_create_redeem_order(&request).await?);
            }
            OrderAdminCommand::Use { id } => {
                client.admin_use_redeem_order(id).await?;
                print_ok("已核销");
            }
            OrderAdminCommand::Cancel { id } => {
                client.admin_cancel_redeem_order(id).await?;
                print_ok("订单已取消");
            }
        },
        AdminCommand::PointsAdjust {
            user_id,
            amount,
            remark,
        } => {
            client
                .admin_adjust_points(&PointsAdjustRequest {
                    user_id,
                    change_amount: amount,
                    remark,
                })
                .await?;
            print_ok("积分已调整");
        }
        AdminCommand::Audit(page) => print_json(&client.admin_audit_logs(&page.to_query()).await?),
        AdminCommand::Upload { file } => print_json(&client.admin_upload_media(&file).await?),
    }
    Ok(())
}

fn parse_payload<T: serde::de::DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| SocialError::invalid_input(format!("参数格式错误: {}", e)))
}

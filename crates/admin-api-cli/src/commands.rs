/*
[INPUT]:  Parsed subcommands and an endpoint catalog
[OUTPUT]: JSON value of the operation result
[POS]:    Command layer - maps CLI subcommands onto catalog operations
[UPDATE]: When adding subcommands or catalog operations
*/

use std::path::PathBuf;

use admin_api_client::{
    EnableStatus, LoginRequest, RoleMenu, RoleModel, RolePermission, RoleSearchParams,
    SystemManageApi, TenantSearchParams, Transport, UserSearchParams,
};
use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Roles and their menu/API grants
    #[command(subcommand)]
    Roles(RoleCommand),
    #[command(subcommand)]
    Users(UserCommand),
    /// Menus (routes)
    #[command(subcommand)]
    Menus(MenuCommand),
    /// API endpoints available for authorization
    #[command(subcommand)]
    Apis(ApiCommand),
    #[command(subcommand)]
    Tenants(TenantCommand),
    /// Sign in and print the token pair
    Login {
        #[arg(long = "user")]
        user_name: String,
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in user
    Whoami,
    /// Local configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Enabled roles only
    All,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "")]
        remark: String,
        #[arg(long, default_value_t = 0)]
        order: i32,
        #[arg(long, value_enum, default_value_t = StatusArg::Enabled)]
        status: StatusArg,
    },
    Delete { id: String },
    /// Menu ids granted to a role
    Menus { role_id: String },
    /// Operation ids granted to a role
    Apis { role_id: String },
    AssignMenus {
        role_id: String,
        #[arg(required = true)]
        menu_ids: Vec<String>,
    },
    AssignApis {
        role_id: String,
        #[arg(required = true)]
        operation_ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    List {
        #[arg(long)]
        account_name: Option<String>,
        #[arg(long)]
        nick_name: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[command(flatten)]
        page: PageArgs,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// All menus as one page; failures are reported in the `error` field
    List,
    Tree,
    /// Page keys known to the router
    Pages,
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ApiCommand {
    Tree,
}

#[derive(Subcommand, Debug)]
pub enum TenantCommand {
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        contact_account_name: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[command(flatten)]
        page: PageArgs,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a starter profile
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    /// Print the effective profile with the token masked
    Show,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    #[arg(long)]
    pub current: Option<u64>,
    #[arg(long)]
    pub size: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Enabled,
    Disabled,
}

impl From<StatusArg> for EnableStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Enabled => EnableStatus::Enabled,
            StatusArg::Disabled => EnableStatus::Disabled,
        }
    }
}

impl Command {
    /// Subcommand name for logs; arguments may carry secrets
    pub fn name(&self) -> &'static str {
        match self {
            Command::Roles(_) => "roles",
            Command::Users(_) => "users",
            Command::Menus(_) => "menus",
            Command::Apis(_) => "apis",
            Command::Tenants(_) => "tenants",
            Command::Login { .. } => "login",
            Command::Whoami => "whoami",
            Command::Config(_) => "config",
        }
    }
}

/// Flags given on the command line become filters; absent flags are omitted
fn filter<T>(value: Option<T>) -> Option<Option<T>> {
    value.map(Some)
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("encode result")
}

/// Run one backend command and return its result as JSON
pub async fn execute<T: Transport>(api: &SystemManageApi<T>, command: Command) -> Result<Value> {
    debug!(command = command.name(), "executing command");
    match command {
        Command::Roles(command) => execute_role(api, command).await,
        Command::Users(command) => execute_user(api, command).await,
        Command::Menus(command) => execute_menu(api, command).await,
        Command::Apis(ApiCommand::Tree) => to_json(
            api.fetch_get_api_endpoint_tree()
                .await
                .context("fetch API endpoints")?,
        ),
        Command::Tenants(command) => execute_tenant(api, command).await,
        Command::Login {
            user_name,
            password,
        } => {
            let token = api
                .fetch_login(&LoginRequest {
                    user_name,
                    password,
                })
                .await
                .context("login")?;
            to_json(token)
        }
        Command::Whoami => to_json(api.fetch_get_user_info().await.context("fetch user info")?),
        Command::Config(_) => bail!("config commands run locally"),
    }
}

async fn execute_role<T: Transport>(api: &SystemManageApi<T>, command: RoleCommand) -> Result<Value> {
    match command {
        RoleCommand::List {
            name,
            code,
            status,
            page,
        } => {
            let params = RoleSearchParams {
                name: filter(name),
                code: filter(code),
                status: filter(status.map(EnableStatus::from)),
                current: filter(page.current),
                size: filter(page.size),
            };
            to_json(api.fetch_get_role_list(Some(&params)).await.context("list roles")?)
        }
        RoleCommand::All => to_json(api.fetch_get_all_roles().await.context("list enabled roles")?),
        RoleCommand::Create {
            name,
            code,
            remark,
            order,
            status,
        } => {
            let model = RoleModel {
                id: None,
                name,
                code,
                remark,
                status: Some(status.into()),
                order,
            };
            api.create_role(&model).await.context("create role")
        }
        RoleCommand::Delete { id } => api.delete_role(&id).await.context("delete role"),
        RoleCommand::Menus { role_id } => to_json(
            api.fetch_get_role_menu_ids(&role_id)
                .await
                .context("fetch role menus")?,
        ),
        RoleCommand::Apis { role_id } => to_json(
            api.fetch_get_role_api_endpoints(&role_id)
                .await
                .context("fetch role API grants")?,
        ),
        RoleCommand::AssignMenus { role_id, menu_ids } => {
            let req = RoleMenu { role_id, menu_ids };
            to_json(api.fetch_assign_routes(&req).await.context("assign menus")?)
        }
        RoleCommand::AssignApis {
            role_id,
            operation_ids,
        } => {
            let req = RolePermission {
                role_id,
                operation_ids,
            };
            to_json(api.fetch_assign_permission(&req).await.context("assign API grants")?)
        }
    }
}

async fn execute_user<T: Transport>(api: &SystemManageApi<T>, command: UserCommand) -> Result<Value> {
    match command {
        UserCommand::List {
            account_name,
            nick_name,
            phone_number,
            email,
            status,
            page,
        } => {
            let params = UserSearchParams {
                account_name: filter(account_name),
                nick_name: filter(nick_name),
                phone_number: filter(phone_number),
                email: filter(email),
                status: filter(status.map(EnableStatus::from)),
                current: filter(page.current),
                size: filter(page.size),
            };
            to_json(api.fetch_get_user_list(Some(&params)).await.context("list users")?)
        }
        UserCommand::Delete { id } => api.delete_user(&id).await.context("delete user"),
    }
}

async fn execute_menu<T: Transport>(api: &SystemManageApi<T>, command: MenuCommand) -> Result<Value> {
    match command {
        MenuCommand::List => to_json(api.fetch_get_menu_list().await),
        MenuCommand::Tree => to_json(api.fetch_get_menu_tree().await.context("fetch menu tree")?),
        MenuCommand::Pages => to_json(api.fetch_get_all_pages().await.context("fetch pages")?),
        MenuCommand::Delete { id } => api.delete_route(&id).await.context("delete menu"),
    }
}

async fn execute_tenant<T: Transport>(
    api: &SystemManageApi<T>,
    command: TenantCommand,
) -> Result<Value> {
    match command {
        TenantCommand::List {
            name,
            contact_account_name,
            status,
            page,
        } => {
            let params = TenantSearchParams {
                name: filter(name),
                contact_account_name: filter(contact_account_name),
                status: filter(status.map(EnableStatus::from)),
                current: filter(page.current),
                size: filter(page.size),
            };
            to_json(api.fetch_get_tenant_list(Some(&params)).await.context("list tenants")?)
        }
        TenantCommand::Delete { id } => api.delete_tenant(&id).await.context("delete tenant"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_api_client::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_role_list_only_sends_given_flags() {
        let api = SystemManageApi::new(MockTransport::new().respond_with(json!({
            "records": [], "current": 1, "size": 5, "total": 0
        })));
        let command = Command::Roles(RoleCommand::List {
            name: None,
            code: Some("ADMIN".to_string()),
            status: Some(StatusArg::Disabled),
            page: PageArgs {
                current: Some(1),
                size: Some(5),
            },
        });

        let output = execute(&api, command).await.expect("execute");

        assert_eq!(output["total"], json!(0));
        let request = api.transport().last_request().expect("request");
        assert_eq!(
            request.params,
            Some(json!({"code": "ADMIN", "status": "DISABLED", "current": 1, "size": 5}))
        );
    }

    #[tokio::test]
    async fn test_menu_list_reports_failure_in_output() {
        let api = SystemManageApi::new(MockTransport::new().fail_with("boom"));

        let output = execute(&api, Command::Menus(MenuCommand::List))
            .await
            .expect("menu list never fails");

        assert_eq!(output, json!({"data": null, "error": "boom"}));
    }

    #[tokio::test]
    async fn test_other_failures_propagate_with_context() {
        let api = SystemManageApi::new(MockTransport::new().fail_with("boom"));

        let err = execute(&api, Command::Menus(MenuCommand::Tree))
            .await
            .expect_err("tree fails");

        assert_eq!(err.to_string(), "fetch menu tree");
        assert_eq!(err.root_cause().to_string(), "boom");
    }

    #[tokio::test]
    async fn test_config_commands_are_local() {
        let api = SystemManageApi::new(MockTransport::new());

        let result = execute(&api, Command::Config(ConfigCommand::Show)).await;

        assert!(result.is_err());
        assert!(api.transport().requests().is_empty());
    }
}

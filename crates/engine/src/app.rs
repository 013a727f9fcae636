//! Application state and composition.

use std::sync::Arc;

use anyhow::Result;
use jx3calc_domain::EnchantNaming;

use crate::api::{
    format_guide, format_lookup_reply, format_reply, parse_trigger, usage_reply, Command, Reply,
};
use crate::infrastructure::{
    calculator::CalculatorClient,
    clock::SystemClock,
    config::AppConfig,
    enchant_table::EnchantTable,
    guide_api::GuideApiClient,
    kungfu_table::KungfuTable,
    ports::{
        CalculatorPort, ClockPort, EquipmentSource, GuideIndex, KungfuLookup, RoleDirectory,
        ServerResolver, ViewRenderer,
    },
    role_api::RoleApiClient,
    server_directory::ServerDirectory,
    tuilan::TuilanClient,
    view_api::{ViewApiClient, ViewCredentials},
};
use crate::use_cases::calculator::{AssembleSnapshot, CalculatorUseCases, SubmitCalculation};
use crate::use_cases::lookup::{DungeonClears, LookupUseCases, SerendipityLookup};

/// Every external collaborator the triggers need.
pub struct Ports {
    pub servers: Arc<dyn ServerResolver>,
    pub roles: Arc<dyn RoleDirectory>,
    pub equipment: Arc<dyn EquipmentSource>,
    pub kungfu: Arc<dyn KungfuLookup>,
    pub enchants: Arc<dyn EnchantNaming>,
    pub calculator: Arc<dyn CalculatorPort>,
    pub clock: Arc<dyn ClockPort>,
    pub views: Arc<dyn ViewRenderer>,
    pub guides: Arc<dyn GuideIndex>,
}

/// Main application state.
pub struct App {
    pub use_cases: CalculatorUseCases,
    pub lookups: LookupUseCases,
}

impl App {
    /// Wires the HTTP adapters and static tables from configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let servers = match &config.group_servers_path {
            Some(path) => ServerDirectory::from_group_file(path)?,
            None => ServerDirectory::default(),
        };

        let timeout = config.http_timeout_secs;
        Ok(Self::with_ports(Ports {
            servers: Arc::new(servers),
            roles: Arc::new(RoleApiClient::new(&config.role_url, timeout)),
            equipment: Arc::new(TuilanClient::new(
                &config.equip_url,
                config.equip_ticket.clone(),
                timeout,
            )),
            kungfu: Arc::new(KungfuTable::new()),
            enchants: Arc::new(EnchantTable::new(config.enchant_prefix.clone())),
            calculator: Arc::new(CalculatorClient::new(
                &config.calculator_url,
                &config.calculator_token,
                timeout,
            )),
            clock: Arc::new(SystemClock::new()),
            views: Arc::new(ViewApiClient::new(
                &config.view_url,
                ViewCredentials {
                    token: config.view_token.clone(),
                    ticket: config.view_ticket.clone(),
                    nickname: config.bot_name.clone(),
                },
                timeout,
            )),
            guides: Arc::new(GuideApiClient::new(&config.guide_url, timeout)),
        }))
    }

    pub fn with_ports(ports: Ports) -> Self {
        let assemble = Arc::new(AssembleSnapshot::new(
            ports.equipment.clone(),
            ports.kungfu,
            ports.enchants,
            ports.clock,
        ));
        let submit = Arc::new(SubmitCalculation::new(
            ports.servers.clone(),
            ports.roles,
            ports.equipment,
            assemble.clone(),
            ports.calculator,
        ));
        let serendipity = Arc::new(SerendipityLookup::new(
            ports.servers.clone(),
            ports.views.clone(),
            ports.guides,
        ));
        let dungeon = Arc::new(DungeonClears::new(ports.servers, ports.views));

        Self {
            use_cases: CalculatorUseCases::new(assemble, submit),
            lookups: LookupUseCases::new(serendipity, dungeon),
        }
    }

    /// Runs one chat trigger end to end and returns the reply.
    pub async fn handle(&self, keyword: &str, args: &str, group: Option<&str>) -> Reply {
        let command = match parse_trigger(keyword, args, group) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(keyword, error = %e, "Rejected command arguments");
                return usage_reply(keyword, &e);
            }
        };

        let serendipity = &self.lookups.serendipity;
        match command {
            Command::Calculate(request) => {
                Reply::Text(format_reply(&self.use_cases.submit.execute(request).await))
            }
            Command::Serendipity(request) => {
                format_lookup_reply(&serendipity.character(request).await)
            }
            Command::ServerSerendipities(request) => {
                format_lookup_reply(&serendipity.server(request).await)
            }
            Command::GlobalSerendipity(name) => format_lookup_reply(&serendipity.global(&name).await),
            Command::GlobalStatistics(name) => {
                format_lookup_reply(&serendipity.global_statistics(&name).await)
            }
            Command::SerendipityGuide(name) => format_guide(&name, &serendipity.guide(&name).await),
            Command::DungeonClears(request) => {
                format_lookup_reply(&self.lookups.dungeon.execute(request).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::api::{LOOKUP_USAGE, USAGE};
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{
        MockCalculatorPort, MockEquipmentSource, MockGuideIndex, MockKungfuLookup,
        MockRoleDirectory, MockViewRenderer, ViewRequest,
    };
    use crate::test_fixtures::{group_directory, role_summary, yaozong_blob};

    fn app_with(
        calculator: MockCalculatorPort,
        views: MockViewRenderer,
        guides: MockGuideIndex,
    ) -> App {
        let mut roles = MockRoleDirectory::new();
        roles
            .expect_fetch_role_summary()
            .returning(|_, _| Ok(Some(role_summary())));
        let mut equipment = MockEquipmentSource::new();
        equipment
            .expect_fetch_raw_equipment()
            .returning(|_, _, _| Ok(yaozong_blob()));
        let mut kungfu = MockKungfuLookup::new();
        kungfu
            .expect_kungfu_name()
            .returning(|_| Some("无方".to_string()));

        App::with_ports(Ports {
            servers: Arc::new(group_directory()),
            roles: Arc::new(roles),
            equipment: Arc::new(equipment),
            kungfu: Arc::new(kungfu),
            enchants: Arc::new(EnchantTable::default()),
            calculator: Arc::new(calculator),
            clock: Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap())),
            views: Arc::new(views),
            guides: Arc::new(guides),
        })
    }

    fn app(calculator: MockCalculatorPort) -> App {
        app_with(calculator, MockViewRenderer::new(), MockGuideIndex::new())
    }

    fn lookup_app(views: MockViewRenderer) -> App {
        let mut calculator = MockCalculatorPort::new();
        calculator.expect_submit().never();
        app_with(calculator, views, MockGuideIndex::new())
    }

    #[tokio::test]
    async fn command_round_trip() {
        let mut calculator = MockCalculatorPort::new();
        calculator
            .expect_submit()
            .times(1)
            .returning(|_| Ok(json!({"code": 200, "data": {"dps": 398211}})));

        let reply = app(calculator).handle("计算器", "秦墨 无方", Some("114514")).await;
        assert!(reply.to_string().contains("398211"));
    }

    #[tokio::test]
    async fn bad_arguments_get_usage() {
        let mut calculator = MockCalculatorPort::new();
        calculator.expect_submit().never();

        let reply = app(calculator).handle("计算器", "秦墨", Some("114514")).await;
        assert_eq!(reply, Reply::Text(USAGE.to_string()));
    }

    #[tokio::test]
    async fn unbound_group_is_reported() {
        let mut calculator = MockCalculatorPort::new();
        calculator.expect_submit().never();

        let reply = app(calculator).handle("计算器", "秦墨 无方", Some("999")).await;
        assert!(reply.to_string().contains("绑定服务器"));
    }

    #[tokio::test]
    async fn test_dungeon_trigger_replies_with_image() {
        let mut views = MockViewRenderer::new();
        views
            .expect_render()
            .withf(|view| {
                *view
                    == ViewRequest::DungeonClears {
                        server: "梦江南".into(),
                        name: "哭包猫".into(),
                    }
            })
            .times(1)
            .returning(|_| Ok("https://cdn.example/cd.png".to_string()));

        let reply = lookup_app(views).handle("副本", "哭包猫", Some("114514")).await;
        assert_eq!(reply, Reply::Image("https://cdn.example/cd.png".to_string()));
    }

    #[tokio::test]
    async fn serendipity_trigger_with_unknown_server() {
        let mut views = MockViewRenderer::new();
        views.expect_render().never();

        let reply = lookup_app(views).handle("奇遇", "火星 哭包猫", Some("114514")).await;
        assert!(reply.to_string().contains("火星"));
    }

    #[tokio::test]
    async fn lookup_with_too_many_arguments_gets_lookup_usage() {
        let mut views = MockViewRenderer::new();
        views.expect_render().never();

        let reply = lookup_app(views).handle("副本", "a b c", None).await;
        assert_eq!(reply, Reply::Text(LOOKUP_USAGE.to_string()));
    }

    #[tokio::test]
    async fn guide_trigger_formats_link() {
        let mut guides = MockGuideIndex::new();
        guides
            .expect_guide_id()
            .returning(|_| Ok(Some("36".to_string())));
        let mut calculator = MockCalculatorPort::new();
        calculator.expect_submit().never();

        let reply = app_with(calculator, MockViewRenderer::new(), guides)
            .handle("前置", "阴阳两界", None)
            .await;
        assert_eq!(
            reply.to_string(),
            "【阴阳两界】魔盒攻略：\nhttps://jx3box.com/adventure/36"
        );
    }
}

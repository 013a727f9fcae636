//! Chat trigger surface: argument parsing and reply text.

use std::fmt;

use serde_json::Value;

use crate::use_cases::calculator::{CalculationRequest, CalculatorError};
use crate::use_cases::lookup::{CharacterLookup, LookupError, ServerLookup};

pub const USAGE: &str = "用法：计算器 [服务器] <角色名> <心法>";
pub const LOOKUP_USAGE: &str = "唔……参数不正确哦，请检查后重试~";
pub const MISSING_SERENDIPITY: &str = "唔，缺少奇遇名称，没有办法找哦~";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("wrong number of arguments: {0}")]
    WrongArity(usize),
    #[error("missing serendipity name")]
    MissingSerendipity,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}

/// A recognised chat trigger with its parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 计算器
    Calculate(CalculationRequest),
    /// 奇遇
    Serendipity(CharacterLookup),
    /// 近期奇遇
    ServerSerendipities(ServerLookup),
    /// 全服奇遇
    GlobalSerendipity(String),
    /// 全服统计
    GlobalStatistics(String),
    /// 前置
    SerendipityGuide(String),
    /// 副本
    DungeonClears(CharacterLookup),
}

/// What goes back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// URL of a rendered image.
    Image(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Image(url) => f.write_str(url),
        }
    }
}

/// Parses the arguments of the trigger named by `keyword`.
pub fn parse_trigger(
    keyword: &str,
    args: &str,
    group: Option<&str>,
) -> Result<Command, CommandError> {
    match keyword {
        "计算器" => parse_command(args, group).map(Command::Calculate),
        "奇遇" => parse_character(args, group).map(Command::Serendipity),
        "副本" => parse_character(args, group).map(Command::DungeonClears),
        "近期奇遇" => parse_server_lookup(args, group).map(Command::ServerSerendipities),
        "全服奇遇" => parse_serendipity(args).map(Command::GlobalSerendipity),
        "全服统计" => parse_serendipity(args).map(Command::GlobalStatistics),
        "前置" => parse_serendipity(args).map(Command::SerendipityGuide),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Reply for arguments the trigger could not parse.
pub fn usage_reply(keyword: &str, error: &CommandError) -> Reply {
    match error {
        CommandError::MissingSerendipity => Reply::Text(MISSING_SERENDIPITY.to_string()),
        _ if keyword == "计算器" => Reply::Text(USAGE.to_string()),
        _ => Reply::Text(LOOKUP_USAGE.to_string()),
    }
}

/// Parses `"[server] <name> <school>"`.
///
/// Without a server token the group's bound server is used.
pub fn parse_command(args: &str, group: Option<&str>) -> Result<CalculationRequest, CommandError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let (server, name, school) = match tokens.as_slice() {
        [name, school] => (None, *name, *school),
        [server, name, school] => (Some(server.to_string()), *name, *school),
        other => return Err(CommandError::WrongArity(other.len())),
    };

    Ok(CalculationRequest {
        server,
        name: name.to_string(),
        group: group.map(str::to_string),
        school: school.to_string(),
    })
}

/// Parses `"[server] <name>"`.
fn parse_character(args: &str, group: Option<&str>) -> Result<CharacterLookup, CommandError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let (server, name) = match tokens.as_slice() {
        [name] => (None, *name),
        [server, name] => (Some(server.to_string()), *name),
        other => return Err(CommandError::WrongArity(other.len())),
    };

    Ok(CharacterLookup {
        server,
        name: name.to_string(),
        group: group.map(str::to_string),
    })
}

/// Parses `"[[server] <serendipity>]"`. A single token is the serendipity;
/// no tokens asks for every recent trigger on the group's server.
fn parse_server_lookup(args: &str, group: Option<&str>) -> Result<ServerLookup, CommandError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let (server, serendipity) = match tokens.as_slice() {
        [] => (None, None),
        [serendipity] => (None, Some(serendipity.to_string())),
        [server, serendipity] => (Some(server.to_string()), Some(serendipity.to_string())),
        other => return Err(CommandError::WrongArity(other.len())),
    };

    Ok(ServerLookup {
        server,
        serendipity,
        group: group.map(str::to_string),
    })
}

fn parse_serendipity(args: &str) -> Result<String, CommandError> {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingSerendipity);
    }
    Ok(name.to_string())
}

/// Text sent back to the chat for a calculation outcome.
pub fn format_reply(result: &Result<Value, CalculatorError>) -> String {
    match result {
        Ok(reply) => serde_json::to_string_pretty(reply).unwrap_or_else(|_| reply.to_string()),
        Err(CalculatorError::ServerUnresolved) => {
            "尚未绑定服务器，请携带服务器参数使用！".to_string()
        }
        Err(CalculatorError::RoleNotFound { server, name }) => {
            format!("唔……{server}未找到角色「{name}」，请检查服务器与角色名！")
        }
        Err(CalculatorError::SchoolMismatch { expected, actual }) => {
            format!("唔……该角色当前心法为{actual}，与指定的{expected}不符，请先在游戏内切换心法！")
        }
        Err(CalculatorError::StructuralPrecondition(_)) => {
            "唔……角色装备不完整，无法计算！".to_string()
        }
        Err(_) => "唔……获取数据失败，请稍后再试！".to_string(),
    }
}

/// Reply for a rendered-view lookup: the image, or why there is none.
pub fn format_lookup_reply(result: &Result<String, LookupError>) -> Reply {
    match result {
        Ok(url) => Reply::Image(url.clone()),
        Err(LookupError::ServerUnresolved { alias: Some(alias) }) => {
            Reply::Text(format!("唔……没有找到服务器「{alias}」，请检查后重试~"))
        }
        Err(LookupError::ServerUnresolved { alias: None }) => {
            Reply::Text("没有绑定服务器，请携带服务器参数使用！".to_string())
        }
        Err(LookupError::GuideNotFound(name)) => {
            Reply::Text(format!("唔……没有找到「{name}」的攻略~"))
        }
        Err(LookupError::UpstreamUnavailable(_)) => {
            Reply::Text("唔……获取数据失败，请稍后再试！".to_string())
        }
    }
}

/// Guide link text for a serendipity.
pub fn format_guide(serendipity: &str, result: &Result<String, LookupError>) -> Reply {
    match result {
        Ok(url) => Reply::Text(format!("【{serendipity}】魔盒攻略：\n{url}")),
        Err(_) => format_lookup_reply(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_with_server() {
        let request = parse_command("唯满侠 秦墨 无方", Some("114514")).unwrap();
        assert_eq!(request.server.as_deref(), Some("唯满侠"));
        assert_eq!(request.name, "秦墨");
        assert_eq!(request.school, "无方");
        assert_eq!(request.group.as_deref(), Some("114514"));
    }

    #[test]
    fn server_is_optional() {
        let request = parse_command("  秦墨   无方 ", None).unwrap();
        assert!(request.server.is_none());
        assert_eq!(request.name, "秦墨");
        assert!(request.group.is_none());
    }

    #[test]
    fn wrong_arity() {
        assert_eq!(parse_command("秦墨", None), Err(CommandError::WrongArity(1)));
        assert_eq!(parse_command("", None), Err(CommandError::WrongArity(0)));
        assert_eq!(
            parse_command("a b c d", None),
            Err(CommandError::WrongArity(4))
        );
    }

    #[test]
    fn replies() {
        assert!(format_reply(&Ok(json!({"dps": 1}))).contains("\"dps\": 1"));
        assert!(format_reply(&Err(CalculatorError::ServerUnresolved)).contains("绑定服务器"));
        let mismatch = CalculatorError::SchoolMismatch {
            expected: "无方".into(),
            actual: "灵素".into(),
        };
        assert!(format_reply(&Err(mismatch)).contains("灵素"));
        assert!(format_reply(&Err(CalculatorError::structural("11 slots"))).contains("不完整"));
        assert!(format_reply(&Err(CalculatorError::MalformedUpstreamData("x".into())))
            .contains("获取数据失败"));
    }

    #[test]
    fn test_character_lookups_take_optional_server() {
        assert_eq!(
            parse_trigger("副本", "幽月轮 哭包猫", Some("114514")),
            Ok(Command::DungeonClears(CharacterLookup {
                server: Some("幽月轮".into()),
                name: "哭包猫".into(),
                group: Some("114514".into()),
            }))
        );
        assert_eq!(
            parse_trigger("奇遇", "哭包猫", None),
            Ok(Command::Serendipity(CharacterLookup {
                server: None,
                name: "哭包猫".into(),
                group: None,
            }))
        );
        assert_eq!(
            parse_trigger("奇遇", "a b c", None),
            Err(CommandError::WrongArity(3))
        );
        assert_eq!(parse_trigger("副本", " ", None), Err(CommandError::WrongArity(0)));
    }

    #[test]
    fn server_lookup_single_token_is_the_serendipity() {
        let Ok(Command::ServerSerendipities(lookup)) = parse_trigger("近期奇遇", "阴阳两界", None)
        else {
            panic!("expected a server lookup");
        };
        assert!(lookup.server.is_none());
        assert_eq!(lookup.serendipity.as_deref(), Some("阴阳两界"));

        let Ok(Command::ServerSerendipities(overview)) = parse_trigger("近期奇遇", "", Some("1"))
        else {
            panic!("expected a server lookup");
        };
        assert_eq!(overview.serendipity, None);
        assert_eq!(overview.group.as_deref(), Some("1"));
    }

    #[test]
    fn global_triggers_need_a_name() {
        assert_eq!(
            parse_trigger("全服统计", " 阴阳两界 ", None),
            Ok(Command::GlobalStatistics("阴阳两界".into()))
        );
        assert_eq!(
            parse_trigger("全服奇遇", "  ", None),
            Err(CommandError::MissingSerendipity)
        );
        assert_eq!(
            usage_reply("前置", &CommandError::MissingSerendipity),
            Reply::Text(MISSING_SERENDIPITY.into())
        );
    }

    #[test]
    fn usage_depends_on_trigger() {
        assert_eq!(
            parse_trigger("天气", "x", None),
            Err(CommandError::UnknownCommand("天气".into()))
        );
        assert_eq!(
            usage_reply("计算器", &CommandError::WrongArity(1)),
            Reply::Text(USAGE.into())
        );
        assert_eq!(
            usage_reply("副本", &CommandError::WrongArity(3)),
            Reply::Text(LOOKUP_USAGE.into())
        );
    }

    #[test]
    fn lookup_replies() {
        assert_eq!(
            format_lookup_reply(&Ok("https://cdn.example/1.png".into())),
            Reply::Image("https://cdn.example/1.png".into())
        );
        let unknown = format_lookup_reply(&Err(LookupError::ServerUnresolved {
            alias: Some("火星".into()),
        }));
        assert!(unknown.to_string().contains("火星"));
        let unbound = format_lookup_reply(&Err(LookupError::ServerUnresolved { alias: None }));
        assert!(unbound.to_string().contains("绑定服务器"));
        assert_eq!(
            format_guide("阴阳两界", &Ok("https://jx3box.com/adventure/36".into())),
            Reply::Text("【阴阳两界】魔盒攻略：\nhttps://jx3box.com/adventure/36".into())
        );
        assert!(format_guide("x", &Err(LookupError::GuideNotFound("x".into())))
            .to_string()
            .contains("攻略"));
    }
}

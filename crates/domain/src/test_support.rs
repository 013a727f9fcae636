//! JSON fixtures shaped like the upstream role-equip API.
//!
//! Enabled for this crate's tests and, through the `testing` feature, for
//! downstream crates' tests.

use serde_json::{json, Value};

use crate::upstream::{decode_block, RawEquip};

fn five_stones() -> Value {
    json!([
        {
            "Name": "六级五行石",
            "Level": 6,
            "Param1Max": "12",
            "Param1Min": "12",
            "Icon": {"FileName": "https://icon/stone.png", "Kind": "五行石", "SubKind": "镶嵌"},
            "Attrib": {"Desc": "atPhysicsAttackPowerBase", "GeneratedMagic": "外功攻击提高12"}
        }
    ])
}

/// Non-weapon slot with a populated five-stone block.
pub fn armor(sub_kind: &str) -> Value {
    json!({
        "Name": format!("测试·{sub_kind}"),
        "Icon": {"FileName": format!("https://icon/{sub_kind}.png"), "Kind": "防具", "SubKind": sub_kind},
        "Quality": 12450,
        "StrengthLevel": "6",
        "MaxEquipBoxStrengthLevel": "8",
        "Color": "4",
        "Desc": "",
        "DetailType": sub_kind,
        "ID": "98541",
        "UID": format!("uid-{sub_kind}"),
        "EquipType": {"Desc": "", "EquipUsage": "", "Icon": ""},
        "FiveStone": five_stones()
    })
}

/// Color stone block of a main-hand weapon.
pub fn color_stone_block() -> Value {
    json!({
        "ID": "10010",
        "Name": "彩·无双·斩铁·狂攻(陆)",
        "Level": "6",
        "Type": "五彩石",
        "Icon": {"FileName": "https://icon/color.png", "Kind": "五彩石", "SubKind": "镶嵌"},
        "Attributes": [
            {"Attribute1Value1": "120", "Attribute1Value2": "120",
             "Attrib": {"GeneratedMagic": "外功攻击提高"}},
            {"Attribute1Value1": "346", "Attribute1Value2": "346",
             "Attrib": {"GeneratedMagic": "会心等级提高"}}
        ]
    })
}

/// Permanent enchant block of a main-hand weapon.
pub fn permanent_enchant_block() -> Value {
    json!({
        "ID": 11937,
        "Name": "驭耀·武",
        "Level": 1,
        "Attributes": [
            {"Attribute1Value1": 403, "Attribute1Value2": 403,
             "Attrib": {"GeneratedMagic": "外功攻击提高403"}}
        ]
    })
}

/// Main-hand weapon with a color stone and no permanent enchant.
pub fn weapon() -> Value {
    json!({
        "Name": "测试·武器",
        "Icon": {"FileName": "https://icon/weapon.png", "Kind": "武器", "SubKind": "近身武器"},
        "Quality": 12450,
        "StrengthLevel": "6",
        "MaxEquipBoxStrengthLevel": "8",
        "Color": "5",
        "Desc": "",
        "DetailType": "笔",
        "ID": "31337",
        "UID": "uid-weapon",
        "FiveStone": five_stones(),
        "ColorStone": color_stone_block()
    })
}

/// Throwing pouch; a weapon by kind with no color stone.
pub fn pouch() -> Value {
    json!({
        "Name": "测试·暗器",
        "Icon": {"FileName": "https://icon/pouch.png", "Kind": "武器", "SubKind": "投掷囊"},
        "Quality": 12450,
        "StrengthLevel": "6",
        "MaxEquipBoxStrengthLevel": "8",
        "Color": "4",
        "Desc": "",
        "DetailType": "投掷",
        "ID": "4096",
        "UID": "uid-pouch",
        "FiveStone": five_stones()
    })
}

/// Twelve slots in the order upstream typically reports them.
pub fn standard_loadout() -> Vec<Value> {
    let mut second_ring = armor("戒指");
    second_ring["UID"] = json!("uid-戒指-2");
    vec![
        armor("帽子"),
        armor("上衣"),
        armor("腰带"),
        armor("护臂"),
        armor("下装"),
        armor("鞋"),
        armor("项链"),
        armor("腰坠"),
        armor("戒指"),
        second_ring,
        pouch(),
        weapon(),
    ]
}

/// Thirteen slots: the standard loadout plus a heavy sword.
pub fn cangjian_loadout() -> Vec<Value> {
    let mut heavy = weapon();
    heavy["Name"] = json!("测试·重剑");
    heavy["Icon"]["SubKind"] = json!("重兵类");
    heavy["DetailType"] = json!("重剑");
    heavy["UID"] = json!("uid-heavy");
    let mut loadout = standard_loadout();
    loadout.push(heavy);
    loadout
}

/// Full equip endpoint response.
pub fn equip_blob(kungfu_id: &str, equips: Vec<Value>) -> Value {
    json!({
        "data": {
            "Equips": equips,
            "Kungfu": {"KungfuID": kungfu_id},
            "TotalEquipsScore": 312345,
            "PersonalPanel": [{"name": "外功攻击", "value": 41234, "percent": false}]
        }
    })
}

/// Decodes one equip fixture.
pub fn raw(value: Value) -> RawEquip {
    decode_block(&value, "fixture").expect("fixture decodes")
}

// GENERATED FILE - DO NOT EDIT
// Source: soundbanks/v1/Wwise_IDs.h
// Generator: tools/id-gen

//! Soundbank revision 1: initial wave audio.

#![allow(non_snake_case)]

use crate::category::Category;
use crate::entry::{StateGroup, SymbolEntry};
use crate::snapshot::{Section, Snapshot};

pub mod EVENTS {
    pub const PLAY_BIRDATTACK: u32 = 2435460859;
    pub const PLAY_BIRDFOLLOW: u32 = 217586636;
    pub const PLAY_BIRDSTATIC: u32 = 4227130709;
    pub const PLAY_BIRDTARGET: u32 = 1602214372;
    pub const PLAY_GLIDERHUM: u32 = 1912775917;
    pub const PLAY_LEVELATMO: u32 = 1661723931;
    pub const PLAY_LEVELMUSIC: u32 = 2671044069;
    pub const PLAY_MENUATMO: u32 = 3830652644;
    pub const PLAY_MENUBACK: u32 = 1113566242;
    pub const PLAY_MENUCHOOSE: u32 = 1897074628;
    pub const PLAY_MENUCONFIRM: u32 = 3100142473;
    pub const PLAY_MENUMUSIC: u32 = 2570041344;
    pub const PLAY_PHERODRAG: u32 = 1867351924;
    pub const PLAY_PHEROSHOOT: u32 = 4261851675;
    pub const PLAY_SHIPCANNON: u32 = 275388915;
    pub const PLAY_SHIPDESTROY: u32 = 792515034;
    pub const PLAY_SHIPHORN: u32 = 463795711;
    pub const PLAY_SHIPSTATICBIG: u32 = 236989436;
    pub const PLAY_SHIPSTATICSMALL: u32 = 264564891;
    pub const STOP_ALL: u32 = 452547817;
}

pub mod STATES {
    pub mod WAVE_STATE {
        pub const GROUP: u32 = 108563492;

        pub mod STATE {
            pub const NONE: u32 = 748895195;
            pub const PEACE1: u32 = 1350254358;
            pub const PEACE2: u32 = 1350254357;
            pub const PEACE3: u32 = 1350254356;
            pub const PEACE4: u32 = 1350254355;
            pub const PEACE5: u32 = 1350254354;
            pub const WAR1: u32 = 1873893370;
            pub const WAR2: u32 = 1873893369;
            pub const WAR3: u32 = 1873893368;
            pub const WAR4: u32 = 1873893375;
            pub const WAR5: u32 = 1873893374;
        }
    }

    pub mod WAVE_TYPE {
        pub const GROUP: u32 = 3590821249;

        pub mod STATE {
            pub const NONE: u32 = 748895195;
            pub const PEACE: u32 = 103389341;
            pub const WAR: u32 = 1113986025;
        }
    }
}

pub mod GAME_PARAMETERS {
    pub const PLAYER_HEALTH: u32 = 215992295;
    pub const PLAYER_SPEED: u32 = 1062779386;
}

pub mod TRIGGERS {
    pub const SHIP_SINK: u32 = 2111840295;
    pub const SHIP_SPAWN: u32 = 953668639;
}

pub mod BANKS {
    pub const INIT: u32 = 1355168291;
    pub const MASTER: u32 = 4056684167;
}

pub mod BUSSES {
    pub const _2D_SFX: u32 = 1191978290;
    pub const _3D_MUSIC: u32 = 2352922065;
    pub const _3D_SFX: u32 = 3938878469;
    pub const MASTER_BINAURAL: u32 = 3007728267;
}

pub mod AUX_BUSSES {
    pub const REVERB: u32 = 348963605;
}

pub mod AUDIO_DEVICES {
    pub const NO_OUTPUT: u32 = 2317455096;
    pub const SYSTEM: u32 = 3859886410;
}

pub static SNAPSHOT: Snapshot = Snapshot {
    revision: 1,
    label: "initial wave audio",
    source: "soundbanks/v1/Wwise_IDs.h",
    sections: &[
        Section {
            category: Category::Event,
            entries: &[
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_BIRDATTACK", id: EVENTS::PLAY_BIRDATTACK },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_BIRDFOLLOW", id: EVENTS::PLAY_BIRDFOLLOW },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_BIRDSTATIC", id: EVENTS::PLAY_BIRDSTATIC },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_BIRDTARGET", id: EVENTS::PLAY_BIRDTARGET },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_GLIDERHUM", id: EVENTS::PLAY_GLIDERHUM },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_LEVELATMO", id: EVENTS::PLAY_LEVELATMO },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_LEVELMUSIC", id: EVENTS::PLAY_LEVELMUSIC },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_MENUATMO", id: EVENTS::PLAY_MENUATMO },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_MENUBACK", id: EVENTS::PLAY_MENUBACK },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_MENUCHOOSE", id: EVENTS::PLAY_MENUCHOOSE },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_MENUCONFIRM", id: EVENTS::PLAY_MENUCONFIRM },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_MENUMUSIC", id: EVENTS::PLAY_MENUMUSIC },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_PHERODRAG", id: EVENTS::PLAY_PHERODRAG },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_PHEROSHOOT", id: EVENTS::PLAY_PHEROSHOOT },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_SHIPCANNON", id: EVENTS::PLAY_SHIPCANNON },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_SHIPDESTROY", id: EVENTS::PLAY_SHIPDESTROY },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_SHIPHORN", id: EVENTS::PLAY_SHIPHORN },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_SHIPSTATICBIG", id: EVENTS::PLAY_SHIPSTATICBIG },
                SymbolEntry { category: Category::Event, group: None, name: "PLAY_SHIPSTATICSMALL", id: EVENTS::PLAY_SHIPSTATICSMALL },
                SymbolEntry { category: Category::Event, group: None, name: "STOP_ALL", id: EVENTS::STOP_ALL },
            ],
        },
        Section {
            category: Category::GameParameter,
            entries: &[
                SymbolEntry { category: Category::GameParameter, group: None, name: "PLAYER_HEALTH", id: GAME_PARAMETERS::PLAYER_HEALTH },
                SymbolEntry { category: Category::GameParameter, group: None, name: "PLAYER_SPEED", id: GAME_PARAMETERS::PLAYER_SPEED },
            ],
        },
        Section {
            category: Category::Trigger,
            entries: &[
                SymbolEntry { category: Category::Trigger, group: None, name: "SHIP_SINK", id: TRIGGERS::SHIP_SINK },
                SymbolEntry { category: Category::Trigger, group: None, name: "SHIP_SPAWN", id: TRIGGERS::SHIP_SPAWN },
            ],
        },
        Section {
            category: Category::Bank,
            entries: &[
                SymbolEntry { category: Category::Bank, group: None, name: "INIT", id: BANKS::INIT },
                SymbolEntry { category: Category::Bank, group: None, name: "MASTER", id: BANKS::MASTER },
            ],
        },
        Section {
            category: Category::Bus,
            entries: &[
                SymbolEntry { category: Category::Bus, group: None, name: "_2D_SFX", id: BUSSES::_2D_SFX },
                SymbolEntry { category: Category::Bus, group: None, name: "_3D_MUSIC", id: BUSSES::_3D_MUSIC },
                SymbolEntry { category: Category::Bus, group: None, name: "_3D_SFX", id: BUSSES::_3D_SFX },
                SymbolEntry { category: Category::Bus, group: None, name: "MASTER_BINAURAL", id: BUSSES::MASTER_BINAURAL },
            ],
        },
        Section {
            category: Category::AuxBus,
            entries: &[
                SymbolEntry { category: Category::AuxBus, group: None, name: "REVERB", id: AUX_BUSSES::REVERB },
            ],
        },
        Section {
            category: Category::Device,
            entries: &[
                SymbolEntry { category: Category::Device, group: None, name: "NO_OUTPUT", id: AUDIO_DEVICES::NO_OUTPUT },
                SymbolEntry { category: Category::Device, group: None, name: "SYSTEM", id: AUDIO_DEVICES::SYSTEM },
            ],
        },
    ],
    state_groups: &[
        StateGroup {
            entry: SymbolEntry { category: Category::StateGroup, group: None, name: "WAVE_STATE", id: STATES::WAVE_STATE::GROUP },
            states: &[
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "NONE", id: STATES::WAVE_STATE::STATE::NONE },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "PEACE1", id: STATES::WAVE_STATE::STATE::PEACE1 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "PEACE2", id: STATES::WAVE_STATE::STATE::PEACE2 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "PEACE3", id: STATES::WAVE_STATE::STATE::PEACE3 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "PEACE4", id: STATES::WAVE_STATE::STATE::PEACE4 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "PEACE5", id: STATES::WAVE_STATE::STATE::PEACE5 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "WAR1", id: STATES::WAVE_STATE::STATE::WAR1 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "WAR2", id: STATES::WAVE_STATE::STATE::WAR2 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "WAR3", id: STATES::WAVE_STATE::STATE::WAR3 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "WAR4", id: STATES::WAVE_STATE::STATE::WAR4 },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_STATE"), name: "WAR5", id: STATES::WAVE_STATE::STATE::WAR5 },
            ],
        },
        StateGroup {
            entry: SymbolEntry { category: Category::StateGroup, group: None, name: "WAVE_TYPE", id: STATES::WAVE_TYPE::GROUP },
            states: &[
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_TYPE"), name: "NONE", id: STATES::WAVE_TYPE::STATE::NONE },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_TYPE"), name: "PEACE", id: STATES::WAVE_TYPE::STATE::PEACE },
                SymbolEntry { category: Category::StateValue, group: Some("WAVE_TYPE"), name: "WAR", id: STATES::WAVE_TYPE::STATE::WAR },
            ],
        },
    ],
};

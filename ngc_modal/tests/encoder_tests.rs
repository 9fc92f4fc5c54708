//! Integration tests for the modal state encoders.
//!
//! These drive the public encoders with realistic interpreter snapshots
//! and check the wire arrays and state tags that status consumers see.

use std::io::Write;

use ngc_common::interp::codes::*;
use ngc_common::prelude::*;
use ngc_modal::snapshot::load_snapshot;
use ngc_modal::{
    ActiveState, LatestTagSink, encode_active_g_codes, encode_active_m_codes,
    encode_active_settings, encode_state_tag, publish_state_tag,
};
use tempfile::NamedTempFile;

const G_ORIGIN: usize = 8;
const G_TOOL_LENGTH: usize = 9;
const G_NON_MODAL: usize = 2;
const G_OFFSET_STATE: usize = 16;

/// A program mid-run: inch units, G55, G1 at F20, spindle forward with flood.
fn running_program() -> Settings {
    let mut settings = Settings {
        sequence_number: 120,
        motion_mode: G_1,
        length_units: LengthUnits::Inches,
        feed_rate: 20.0,
        origin_index: 2,
        control_mode: ControlMode::Continuous,
        tolerance: 0.002,
        flood: true,
        feed_override: true,
        filename: "part.ngc".to_string(),
        ..Default::default()
    };
    settings.spindles[0] = SpindleState {
        direction: SpindleDirection::Clockwise,
        speed: 1800.0,
        mode: SpindleMode::ConstantRpm,
        speed_override: true,
    };
    let _ = settings.call_stack.push(CallFrame {
        filename: "part.ngc".to_string(),
    });
    settings
}

// ─── Origins ────────────────────────────────────────────────────────

#[test]
fn origin_codes_cover_every_work_offset() {
    let expected = [
        G_53, G_54, G_55, G_56, G_57, G_58, G_59, G_59_1, G_59_2, G_59_3,
    ];
    for (index, code) in expected.into_iter().enumerate() {
        let settings = Settings {
            origin_index: index as u8,
            ..Default::default()
        };
        let g = encode_active_g_codes(None, &settings).to_array();
        assert_eq!(g[G_ORIGIN], code, "origin index {index}");
        assert_eq!(
            encode_state_tag(None, &settings).field(StateField::Origin),
            code
        );
    }
}

#[test]
fn origin_boundary_between_six_and_seven() {
    let six = Settings {
        origin_index: 6,
        ..Default::default()
    };
    let seven = Settings {
        origin_index: 7,
        ..Default::default()
    };
    assert_eq!(encode_active_g_codes(None, &six).origin, 590);
    assert_eq!(encode_active_g_codes(None, &seven).origin, 591);
}

// ─── Tool Length Offset ─────────────────────────────────────────────

#[test]
fn any_tool_offset_component_activates_g43() {
    for component in 0..9 {
        let mut values = [0.0; 9];
        values[component] = 0.125;
        let [x, y, z, a, b, c, u, v, w] = values;
        let settings = Settings {
            tool_offset: ToolOffset {
                x,
                y,
                z,
                a,
                b,
                c,
                u,
                v,
                w,
            },
            ..Default::default()
        };

        let g = encode_active_g_codes(None, &settings).to_array();
        assert_eq!(g[G_TOOL_LENGTH], G_43, "component {component}");
        assert!(encode_state_tag(None, &settings).flag(StateFlags::TOOL_OFFSETS_ON));
    }

    let g = encode_active_g_codes(None, &Settings::default()).to_array();
    assert_eq!(g[G_TOOL_LENGTH], G_49);
}

// ─── G92 Offset State ───────────────────────────────────────────────

#[test]
fn g92_slot_without_block() {
    let applied = Settings {
        g92_offset_applied: true,
        ..Default::default()
    };
    let g = encode_active_g_codes(None, &applied).to_array();
    assert_eq!(g[G_OFFSET_STATE], G_92_3);
    assert_eq!(g[G_NON_MODAL], NO_CODE);

    let g = encode_active_g_codes(None, &Settings::default()).to_array();
    assert_eq!(g[G_OFFSET_STATE], NO_CODE);
}

#[test]
fn g92_survives_program_end_line() {
    let applied = Settings {
        g92_offset_applied: true,
        ..Default::default()
    };
    // M2 line: group 0 was cleared, offset state not set by the block.
    let end = Block::new().with_m(MModalGroup::Stopping, M_2);

    let g = encode_active_g_codes(Some(&end), &applied).to_array();
    assert_eq!(g[G_OFFSET_STATE], G_92_3);
}

#[test]
fn g92_slot_passes_block_through_when_group0_present() {
    let applied = Settings {
        g92_offset_applied: true,
        ..Default::default()
    };
    let cancel = Block::new()
        .with_g(GModalGroup::NonModal, G_92_1)
        .with_g(GModalGroup::OffsetState, G_92_1);

    let g = encode_active_g_codes(Some(&cancel), &applied).to_array();
    assert_eq!(g[G_NON_MODAL], G_92_1);
    assert_eq!(g[G_OFFSET_STATE], G_92_1);

    // Group 0 present without an offset-state entry reads as nothing.
    let dwell = Block::new().with_g(GModalGroup::NonModal, G_4);
    let g = encode_active_g_codes(Some(&dwell), &applied).to_array();
    assert_eq!(g[G_OFFSET_STATE], NO_CODE);
}

#[test]
fn g92_not_applied_reads_block_entry() {
    let settings = Settings::default();
    let set = Block::new()
        .with_g(GModalGroup::NonModal, G_92)
        .with_g(GModalGroup::OffsetState, G_92);
    assert_eq!(
        encode_active_g_codes(Some(&set), &settings).g92_applied,
        Some(G_92)
    );
    assert_eq!(
        encode_active_g_codes(Some(&Block::new()), &settings).g92_applied,
        None
    );
}

// ─── Whole Snapshot ─────────────────────────────────────────────────

#[test]
fn running_program_arrays() {
    let settings = running_program();
    let block = Block::new().with_g(GModalGroup::Motion, G_1);
    let state = ActiveState::encode(Some(&block), &settings);

    assert_eq!(
        state.g_codes,
        [
            120, G_1, NO_CODE, G_17, G_40, G_20, G_90, G_94, G_55, G_49, G_98, G_64, NO_CODE,
            G_97, G_90_1, G_8, NO_CODE,
        ]
    );
    assert_eq!(
        state.m_codes,
        [120, NO_CODE, M_3, NO_CODE, NO_CODE, M_8, M_48, NO_CODE, NO_CODE]
    );
    assert_eq!(state.settings, [120.0, 20.0, 1800.0, 0.002, 0.0]);
}

#[test]
fn running_program_tag() {
    let settings = running_program();
    let tag = encode_state_tag(None, &settings);

    assert!(tag.is_valid());
    assert_eq!(tag.field(StateField::LineNumber), 120);
    assert_eq!(tag.field(StateField::MotionMode), G_1);
    assert_eq!(tag.field_float(StateFieldFloat::Feed), 20.0);
    assert_eq!(tag.field_float(StateFieldFloat::Speed), 1800.0);
    assert!(tag.flag(StateFlags::UNITS));
    assert!(tag.flag(StateFlags::BLEND));
    assert!(tag.flag(StateFlags::FLOOD));
    assert!(!tag.flag(StateFlags::MIST));
    assert!(tag.flag(StateFlags::SPINDLE_CW));
    assert!(!tag.flag(StateFlags::SPINDLE_ON));
    assert!(tag.flag(StateFlags::CSS_MODE));
    assert!(tag.flag(StateFlags::RESTORABLE));
    assert!(!tag.flag(StateFlags::EXTERNAL_FILE));
}

#[test]
fn subroutine_in_other_file_is_not_restorable() {
    let mut settings = running_program();
    settings.call_level = 1;
    settings.filename = "drill_cycle.ngc".to_string();

    let tag = encode_state_tag(None, &settings);
    assert!(tag.flag(StateFlags::IN_SUB));
    assert!(tag.flag(StateFlags::EXTERNAL_FILE));
    assert!(!tag.flag(StateFlags::RESTORABLE));
}

#[test]
fn encoders_are_idempotent() {
    let settings = running_program();
    let block = Block::new()
        .with_g(GModalGroup::NonModal, G_4)
        .with_m(MModalGroup::ToolChange, M_6);

    assert_eq!(
        encode_active_g_codes(Some(&block), &settings),
        encode_active_g_codes(Some(&block), &settings)
    );
    assert_eq!(
        encode_active_m_codes(Some(&block), &settings),
        encode_active_m_codes(Some(&block), &settings)
    );
    assert_eq!(
        encode_active_settings(&settings),
        encode_active_settings(&settings)
    );
    assert_eq!(
        encode_state_tag(Some(&block), &settings),
        encode_state_tag(Some(&block), &settings)
    );
}

#[test]
fn published_tag_survives_packing() {
    let settings = running_program();
    let block = Block::new().with_m(MModalGroup::Stopping, M_0);

    let mut sink = LatestTagSink::new();
    publish_state_tag(Some(&block), &settings, &mut sink);

    let tag = *sink.latest().unwrap();
    assert_eq!(tag.field(StateField::MModes4), M_0);
    assert_eq!(StateTag::unpack(&tag.pack()), tag);
}

// ─── Snapshot Files ─────────────────────────────────────────────────

#[test]
fn snapshot_file_encodes_like_constructed_settings() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[shared]
service_name = "bench-mill"

[settings]
sequence_number = 42
motion_mode = 0
origin_index = 9
g92_offset_applied = true
mist = true
flood = true

[[settings.spindles]]
direction = "CounterClockwise"
speed = 500.0

[block]
m = [{{ group = 4, code = 2 }}]
"#
    )
    .unwrap();
    file.flush().unwrap();

    let loaded = load_snapshot(file.path()).unwrap();
    assert_eq!(loaded.shared.service_name, "bench-mill");

    let state = ActiveState::encode(loaded.block(), &loaded.settings);
    assert_eq!(state.g_codes[0], 42);
    assert_eq!(state.g_codes[1], G_0);
    assert_eq!(state.g_codes[G_ORIGIN], G_59_3);
    assert_eq!(state.g_codes[G_OFFSET_STATE], G_92_3);
    assert_eq!(state.m_codes[1], M_2);
    assert_eq!(state.m_codes[2], M_4);
    assert_eq!(state.m_codes[4], M_7);
    assert_eq!(state.m_codes[5], M_8);
    assert_eq!(state.settings[2], 500.0);
}

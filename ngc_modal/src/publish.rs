//! State tag publication.
//!
//! The interpreter hands each encoded tag to the canonical state sink,
//! which attaches it to the motion it queues next. Publication is
//! one-way: the sink returns nothing and the encoder never reads back.

use ngc_common::interp::block::Block;
use ngc_common::interp::settings::Settings;
use ngc_common::interp::state_tag::{StateField, StateTag};
use tracing::{debug, trace};

use crate::encode::encode_state_tag;

/// Receiver of published state tags.
pub trait StateSink {
    /// Accept the latest tag.
    fn update_tag(&mut self, tag: &StateTag);
}

/// Encode a state tag and forward it to `sink`.
pub fn publish_state_tag<S: StateSink + ?Sized>(
    block: Option<&Block>,
    settings: &Settings,
    sink: &mut S,
) {
    let tag = encode_state_tag(block, settings);
    trace!(
        line = tag.field(StateField::LineNumber),
        flags = tag.flags.bits(),
        "publishing state tag"
    );
    sink.update_tag(&tag);
}

/// Keeps the most recent tag.
#[derive(Debug, Clone, Default)]
pub struct LatestTagSink {
    latest: Option<StateTag>,
    updates: u64,
}

impl LatestTagSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent tag, if any was published.
    #[inline]
    pub fn latest(&self) -> Option<&StateTag> {
        self.latest.as_ref()
    }

    /// Number of tags received.
    #[inline]
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl StateSink for LatestTagSink {
    fn update_tag(&mut self, tag: &StateTag) {
        self.latest = Some(*tag);
        self.updates += 1;
    }
}

/// Records every tag in publication order.
impl StateSink for Vec<StateTag> {
    fn update_tag(&mut self, tag: &StateTag) {
        self.push(*tag);
    }
}

/// Forwards each tag to both sinks, first then second.
impl<A: StateSink, B: StateSink> StateSink for (A, B) {
    fn update_tag(&mut self, tag: &StateTag) {
        self.0.update_tag(tag);
        self.1.update_tag(tag);
    }
}

/// Logs each tag at DEBUG level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StateSink for TracingSink {
    fn update_tag(&mut self, tag: &StateTag) {
        debug!(
            line = tag.field(StateField::LineNumber),
            motion = tag.field(StateField::MotionMode),
            origin = tag.field(StateField::Origin),
            flags = ?tag.flags,
            "state tag"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngc_common::interp::state_tag::StateFlags;

    #[test]
    fn latest_sink_keeps_last_tag() {
        let mut sink = LatestTagSink::new();
        assert!(sink.latest().is_none());

        let mut settings = Settings::default();
        publish_state_tag(None, &settings, &mut sink);
        settings.sequence_number = 5;
        settings.call_level = 1;
        publish_state_tag(None, &settings, &mut sink);

        assert_eq!(sink.updates(), 2);
        let tag = sink.latest().unwrap();
        assert_eq!(tag.field(StateField::LineNumber), 5);
        assert!(!tag.flag(StateFlags::RESTORABLE));
    }

    #[test]
    fn published_tag_equals_encoded_tag() {
        let settings = Settings {
            mist: true,
            ..Default::default()
        };
        let mut recorded: Vec<StateTag> = Vec::new();
        publish_state_tag(None, &settings, &mut recorded);
        assert_eq!(recorded, vec![encode_state_tag(None, &settings)]);
    }

    #[test]
    fn paired_sinks_receive_the_same_tag() {
        let settings = Settings {
            sequence_number: 9,
            flood: true,
            ..Default::default()
        };
        let mut sinks = (LatestTagSink::new(), Vec::<StateTag>::new());
        publish_state_tag(None, &settings, &mut sinks);

        let (latest, recorded) = sinks;
        assert_eq!(latest.updates(), 1);
        assert_eq!(recorded.len(), 1);
        assert_eq!(latest.latest(), recorded.first());
        assert_eq!(recorded[0], encode_state_tag(None, &settings));
    }

    #[test]
    fn dyn_sink_is_accepted() {
        let mut sink = LatestTagSink::new();
        let dyn_sink: &mut dyn StateSink = &mut sink;
        publish_state_tag(None, &Settings::default(), dyn_sink);
        assert_eq!(sink.updates(), 1);
    }
}

//! Pose-server data contract and per-player routing
//!
//! The pose server sends one JSON packet per camera frame containing the
//! landmark lists for every tracked person. The field names here are the
//! wire contract and must match the server's JSON keys exactly.

use serde::{Deserialize, Serialize};

use crate::fighter::FighterRig;
use crate::pose::Keypoint;

/// One landmark as sent by the pose server
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct LandmarkData {
    pub x: f32,
    pub y: f32,
    /// Relative depth estimate, unused by the classifiers
    #[serde(default)]
    pub z: f32,
    /// Visibility score
    #[serde(default)]
    pub v: f32,
}

/// One tracked person: slot id plus their landmark list
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerData {
    pub id: u32,
    #[serde(default)]
    pub landmarks: Vec<LandmarkData>,
}

/// Top-level packet: all tracked persons for one camera frame
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoseDataPacket {
    #[serde(default)]
    pub players: Vec<PlayerData>,
}

/// Parse a raw packet payload
pub fn parse_packet(json: &str) -> Result<PoseDataPacket, serde_json::Error> {
    serde_json::from_str(json)
}

/// Dispatches pose packets to the two player rigs
///
/// Player slot 0 feeds the left rig, slot 1 the right rig; any other id is
/// dropped. Also keeps a once-per-second packet-rate debug log so a stalled
/// pose server is visible without a debugger.
#[derive(Default)]
pub struct PoseRouter {
    packet_count: u32,
    packet_timer: f32,
}

impl PoseRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one parsed packet to the player rigs
    pub fn route(&mut self, packet: &PoseDataPacket, left: &mut FighterRig, right: &mut FighterRig) {
        self.packet_count += 1;

        for player in &packet.players {
            let rig = match player.id {
                0 => &mut *left,
                1 => &mut *right,
                _ => continue,
            };

            let points: Vec<Keypoint> = player
                .landmarks
                .iter()
                .map(|l| Keypoint::new(l.x, l.y))
                .collect();
            rig.receive_frame(&points);
        }
    }

    /// Parse and route a raw payload; malformed JSON is logged and dropped
    pub fn route_json(&mut self, json: &str, left: &mut FighterRig, right: &mut FighterRig) {
        match parse_packet(json) {
            Ok(packet) => self.route(&packet, left, right),
            Err(err) => log::warn!("dropping malformed pose packet: {err}"),
        }
    }

    /// Advance the rate-log timer; call once per tick
    pub fn tick(&mut self, delta: f32) {
        self.packet_timer += delta;
        if self.packet_timer > 1.0 {
            if self.packet_count > 0 {
                log::debug!("received {} pose packets in the last second", self.packet_count);
            }
            self.packet_count = 0;
            self.packet_timer = 0.0;
        }
    }
}

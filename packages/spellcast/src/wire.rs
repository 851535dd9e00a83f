//! Spell broadcast payload: `'!'` followed by the ASCII label.

use heapless::Vec;

use super::types::GestureLabel;

pub const SPELL_MARKER: u8 = b'!';
pub const SPELL_PAYLOAD_MAX: usize = 6;

pub type SpellPayload = Vec<u8, SPELL_PAYLOAD_MAX>;

/// `Other` is never put on the air.
pub fn encode_spell(label: GestureLabel) -> Option<SpellPayload> {
    if !label.is_direction() {
        return None;
    }
    let mut payload = SpellPayload::new();
    payload.push(SPELL_MARKER).ok()?;
    payload.extend_from_slice(label.as_str().as_bytes()).ok()?;
    Some(payload)
}

pub fn decode_spell(payload: &[u8]) -> Option<GestureLabel> {
    let (&marker, name) = payload.split_first()?;
    if marker != SPELL_MARKER {
        return None;
    }
    let label = GestureLabel::from_name(core::str::from_utf8(name).ok()?)?;
    label.is_direction().then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_encodes_as_marker_and_ascii() {
        let payload = encode_spell(GestureLabel::Left).expect("left is transmittable");
        assert_eq!(payload.as_slice(), &[0x21, b'l', b'e', b'f', b't']);
    }

    #[test]
    fn longest_label_fits() {
        let payload = encode_spell(GestureLabel::Right).expect("right is transmittable");
        assert_eq!(payload.as_slice(), b"!right");
    }

    #[test]
    fn other_is_not_encoded() {
        assert_eq!(encode_spell(GestureLabel::Other), None);
    }

    #[test]
    fn decode_accepts_peer_spells_only() {
        assert_eq!(decode_spell(b"!down"), Some(GestureLabel::Down));
        assert_eq!(decode_spell(b"!other"), None);
        assert_eq!(decode_spell(b"down"), None);
        assert_eq!(decode_spell(b"!dow"), None);
        assert_eq!(decode_spell(b""), None);
        assert_eq!(decode_spell(&[b'!', 0xFF]), None);
    }
}

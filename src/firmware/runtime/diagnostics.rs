use core::fmt::Debug;

use esp_println::println;
use spellcast::{Basis, InboundMessage, SendOutcome, TickReport};

pub(super) fn log_tick<E: Debug>(report: &TickReport<E>, last: Option<&InboundMessage>) {
    if report.inbound_drained > 0 {
        if let Some(message) = last {
            log_inbound(message, report.inbound_drained);
        }
    }

    let Some(episode) = &report.episode else {
        return;
    };
    let assessment = &episode.assessment;
    let best = match assessment.basis {
        Basis::Peak => assessment.best_by_peak(),
        _ => assessment.best_by_count(),
    };
    println!(
        "spell: {} basis={} samples={} count={} peak={}",
        episode.label(),
        assessment.basis.as_str(),
        episode.samples,
        best.strong_count,
        best.peak
    );
    match &episode.send {
        SendOutcome::Sent => println!("espnow: sent spell={}", episode.label()),
        SendOutcome::Failed(err) => println!("espnow: send err={:?}", err),
        SendOutcome::NotSent => {}
    }
}

fn log_inbound(message: &InboundMessage, drained: usize) {
    match message.spell() {
        Some(spell) => println!(
            "espnow: rx from={} drained={} spell={} len={}",
            message.sender,
            drained,
            spell,
            message.payload.len()
        ),
        None => println!(
            "espnow: rx from={} drained={} spell=- len={}",
            message.sender,
            drained,
            message.payload.len()
        ),
    }
}

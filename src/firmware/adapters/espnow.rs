use esp_radio::esp_now::{EspNow, EspNowError};
use spellcast::{InboundMessage, PeerAddress, TransportOps};

pub(crate) struct EspNowTransport<'d> {
    esp_now: EspNow<'d>,
}

impl<'d> EspNowTransport<'d> {
    pub(crate) fn new(esp_now: EspNow<'d>) -> Self {
        Self { esp_now }
    }
}

impl TransportOps for EspNowTransport<'_> {
    type Error = EspNowError;

    async fn send(&mut self, address: &PeerAddress, payload: &[u8]) -> Result<(), Self::Error> {
        self.esp_now.send_async(address.octets(), payload).await
    }

    fn try_receive(&mut self) -> Option<InboundMessage> {
        let received = self.esp_now.receive()?;
        Some(InboundMessage::new(
            PeerAddress(received.info.src_address),
            received.data(),
            received.info.rx_control.timestamp,
        ))
    }
}

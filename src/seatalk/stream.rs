use super::{COMMAND_FLAG, Datagram, MAX_DATAGRAM_LEN};

/// Header bytes: command, attribute and the first data byte.
const HEADER_LEN: usize = 3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Reset,
    ParsingHeader,
    ParsingContent,
    Complete,
}

/// Rebuilds SeaTalk datagrams from 9-bit bus words.
///
/// Feed one word per call to [`SeaTalkStreamParser::parse`]. A word with [`COMMAND_FLAG`]
/// set starts a new datagram whatever the current state; the low nibble of the second byte
/// then tells how many bytes complete it. `parse` returns `true` once the declared length is
/// reached, and the datagram stays available through [`SeaTalkStreamParser::message`] until
/// the next command word arrives.
///
/// Data words received outside a datagram, including after one completed, are ignored.
///
/// ```rust
/// use nmea_seatalk::SeaTalkStreamParser;
///
/// let mut parser = SeaTalkStreamParser::new();
/// assert!(!parser.parse(0x199));
/// assert!(!parser.parse(0x00));
/// assert!(parser.parse(0xF3));
/// assert_eq!(parser.message(), Some(&[0x99, 0x00, 0xF3][..]));
/// ```
#[derive(Debug, Default)]
pub struct SeaTalkStreamParser {
    buffer: heapless::Vec<u8, MAX_DATAGRAM_LEN>,
    /// Total length declared by the attribute byte, known once the header is complete
    declared_len: usize,
    state: State,
    parsed_count: u32,
    truncated_count: u32,
}

impl SeaTalkStreamParser {
    pub fn new() -> Self {
        SeaTalkStreamParser::default()
    }

    /// Consumes one 9-bit word. Returns `true` when a complete datagram is ready.
    pub fn parse(&mut self, word: u16) -> bool {
        let byte = (word & 0xFF) as u8;

        if word & COMMAND_FLAG != 0 {
            if matches!(self.state, State::ParsingHeader | State::ParsingContent) {
                self.truncated_count = self.truncated_count.wrapping_add(1);
                log::debug!(
                    "SeaTalk datagram {:#04x} cut short after {} bytes",
                    self.buffer[0],
                    self.buffer.len(),
                );
            }

            self.buffer.clear();
            // Capacity is never zero, the push cannot fail on an empty buffer
            let _ = self.buffer.push(byte);
            self.declared_len = 0;
            self.state = State::ParsingHeader;
            return false;
        }

        match self.state {
            State::ParsingHeader => {
                if !self.push(byte) {
                    return false;
                }

                if self.buffer.len() < HEADER_LEN {
                    return false;
                }

                self.declared_len = (self.buffer[1] & 0x0F) as usize + HEADER_LEN;
                if self.declared_len > HEADER_LEN {
                    self.state = State::ParsingContent;
                    return false;
                }

                self.complete()
            }
            State::ParsingContent => {
                if !self.push(byte) {
                    return false;
                }

                if self.buffer.len() >= self.declared_len {
                    return self.complete();
                }

                false
            }
            State::Reset | State::Complete => false,
        }
    }

    fn push(&mut self, byte: u8) -> bool {
        if self.buffer.push(byte).is_err() {
            log::debug!("SeaTalk datagram exceeded {MAX_DATAGRAM_LEN} bytes, resetting");
            self.reset();
            return false;
        }

        true
    }

    fn complete(&mut self) -> bool {
        self.state = State::Complete;
        self.parsed_count = self.parsed_count.wrapping_add(1);
        log::trace!(
            "SeaTalk datagram {:#04x} complete ({} bytes)",
            self.buffer[0],
            self.buffer.len()
        );
        true
    }

    /// The last completed datagram while it is still current.
    pub fn message(&self) -> Option<&[u8]> {
        match self.state {
            State::Complete => Some(&self.buffer),
            _ => None,
        }
    }

    /// Length of [`SeaTalkStreamParser::message`], `0` when there is none.
    pub fn message_len(&self) -> usize {
        self.message().map_or(0, <[u8]>::len)
    }

    /// The last completed datagram as an owned [`Datagram`].
    pub fn datagram(&self) -> Option<Datagram> {
        self.message().and_then(|message| Datagram::new(message).ok())
    }

    /// Drops any partial or completed datagram. Counters are kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.declared_len = 0;
        self.state = State::Reset;
    }

    /// Number of datagrams completed since creation.
    pub fn parsed_count(&self) -> u32 {
        self.parsed_count
    }

    /// Number of datagrams abandoned because a command word arrived before they completed.
    pub fn truncated_count(&self) -> u32 {
        self.truncated_count
    }
}

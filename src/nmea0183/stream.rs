use super::{ChecksumMode, MAX_SENTENCE_LEN, checksum, hex_byte};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Reset,
    ParsingContent,
    ParsingChecksum,
    Complete,
}

/// Rebuilds NMEA 0183 sentences from a byte stream.
///
/// Feed one byte per call to [`NmeaStreamParser::parse`]; it returns `true` once a complete
/// sentence with a valid checksum is buffered. The sentence, including a trailing `\r\n`,
/// is then available through [`NmeaStreamParser::message`] until the next byte arrives.
///
/// The parser never fails. Oversized or unterminated input resets it, a `CR`/`LF` outside
/// a sentence resets it, and a checksum mismatch discards the sentence and increments
/// [`NmeaStreamParser::invalid_checksum_count`].
///
/// ```rust
/// use nmea_seatalk::NmeaStreamParser;
///
/// let mut parser = NmeaStreamParser::new();
/// let mut ready = false;
/// for &byte in b"noise$STHDM,236.3,M*21\r\n" {
///     if parser.parse(byte) {
///         ready = true;
///         assert_eq!(parser.sentence(), Some("$STHDM,236.3,M*21\r\n"));
///     }
/// }
/// assert!(ready);
/// assert_eq!(parser.parsed_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NmeaStreamParser {
    buffer: heapless::Vec<u8, MAX_SENTENCE_LEN>,
    /// Number of bytes between the start character and `*`
    content_len: usize,
    state: State,
    checksum_mode: ChecksumMode,
    parsed_count: u32,
    invalid_checksum_count: u32,
}

/// Configures an [`NmeaStreamParser`].
#[must_use]
#[derive(Debug, Default)]
pub struct NmeaStreamParserBuilder {
    checksum_mode: ChecksumMode,
}

impl NmeaStreamParserBuilder {
    /// Sets the checksum mode.
    ///
    /// With [`ChecksumMode::Optional`], a `CR` or `LF` that terminates sentence content
    /// completes a sentence without checksum instead of discarding it.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    pub fn build(self) -> NmeaStreamParser {
        NmeaStreamParser {
            checksum_mode: self.checksum_mode,
            ..NmeaStreamParser::default()
        }
    }
}

impl NmeaStreamParser {
    /// Creates a parser that requires a checksum on every sentence.
    pub fn new() -> Self {
        NmeaStreamParser::default()
    }

    pub fn builder() -> NmeaStreamParserBuilder {
        NmeaStreamParserBuilder::default()
    }

    /// Consumes one byte. Returns `true` when a complete, valid sentence is ready.
    pub fn parse(&mut self, byte: u8) -> bool {
        match byte {
            b'\r' | b'\n' => {
                if self.state == State::ParsingContent
                    && self.checksum_mode == ChecksumMode::Optional
                {
                    self.content_len = self.buffer.len() - 1;
                    return self.complete();
                }

                self.reset();
                false
            }
            b'$' | b'!' => {
                self.buffer.clear();
                // Capacity is never zero, the push cannot fail on an empty buffer
                let _ = self.buffer.push(byte);
                self.state = State::ParsingContent;
                false
            }
            _ => match self.state {
                State::ParsingContent => {
                    if self.buffer.push(byte).is_err() {
                        self.overflow();
                        return false;
                    }

                    if byte == b'*' {
                        self.content_len = self.buffer.len() - 2;
                        self.state = State::ParsingChecksum;
                    }

                    false
                }
                State::ParsingChecksum => {
                    if self.buffer.push(byte).is_err() {
                        self.overflow();
                        return false;
                    }

                    if self.buffer.len() - self.content_len >= 4 {
                        return self.verify_checksum();
                    }

                    false
                }
                State::Reset | State::Complete => {
                    self.reset();
                    false
                }
            },
        }
    }

    fn overflow(&mut self) {
        log::debug!("NMEA frame exceeded {MAX_SENTENCE_LEN} bytes without completing, resetting");
        self.reset();
    }

    fn verify_checksum(&mut self) -> bool {
        let calculated = checksum(&self.buffer[1..1 + self.content_len]);
        let digits = &self.buffer[self.content_len + 2..];
        let received = hex_byte(digits[0], digits[1]);

        if received != Some(calculated) {
            self.invalid_checksum_count = self.invalid_checksum_count.wrapping_add(1);
            log::warn!(
                "NMEA checksum mismatch: calculated {calculated:02X}, received {:?} in {:?}",
                core::str::from_utf8(digits).unwrap_or("??"),
                core::str::from_utf8(&self.buffer).unwrap_or("<non-ASCII>"),
            );
            self.reset();
            return false;
        }

        self.complete()
    }

    fn complete(&mut self) -> bool {
        if self.buffer.extend_from_slice(b"\r\n").is_err() {
            log::debug!("no room for line ending in NMEA frame, resetting");
            self.reset();
            return false;
        }

        self.state = State::Complete;
        self.parsed_count = self.parsed_count.wrapping_add(1);
        log::trace!("NMEA frame complete ({} bytes)", self.buffer.len());
        true
    }

    /// The last completed sentence, `$` through `\r\n`, while it is still current.
    pub fn message(&self) -> Option<&[u8]> {
        match self.state {
            State::Complete => Some(&self.buffer),
            _ => None,
        }
    }

    /// Length of [`NmeaStreamParser::message`], `0` when there is none.
    pub fn message_len(&self) -> usize {
        self.message().map_or(0, <[u8]>::len)
    }

    /// The last completed sentence as text.
    pub fn sentence(&self) -> Option<&str> {
        self.message()
            .and_then(|message| core::str::from_utf8(message).ok())
    }

    /// Drops any partial or completed frame. Counters are kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.content_len = 0;
        self.state = State::Reset;
    }

    /// Number of sentences completed since creation.
    pub fn parsed_count(&self) -> u32 {
        self.parsed_count
    }

    /// Number of sentences discarded because of a checksum mismatch.
    pub fn invalid_checksum_count(&self) -> u32 {
        self.invalid_checksum_count
    }
}

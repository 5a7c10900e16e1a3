//! OSC message model and wire codec
//!
//! Packets are laid out by hand, the same way the DMX senders build their
//! frames; decoding goes through `rosc`.

use rosc::{OscMessage, OscPacket, OscType};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::ControlError, Result};

/// Maximum length of an OSC address string
const MAX_OSC_ADDRESS_LENGTH: usize = 1024;

/// Characters reserved for address patterns; never valid in a sent address
const RESERVED_ADDRESS_CHARS: &[char] = &[' ', '#', '*', ',', '?', '[', ']', '{', '}'];

/// A single positional OSC argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Argument {
    /// 32-bit float (`f`)
    Float(f32),
    /// 32-bit integer (`i`)
    Int(i32),
    /// String (`s`)
    String(String),
}

impl Argument {
    /// OSC type tag character
    pub fn type_tag(&self) -> char {
        match self {
            Argument::Float(_) => 'f',
            Argument::Int(_) => 'i',
            Argument::String(_) => 's',
        }
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Argument::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn write_payload(&self, packet: &mut Vec<u8>) {
        match self {
            Argument::Float(v) => packet.extend_from_slice(&v.to_be_bytes()),
            Argument::Int(v) => packet.extend_from_slice(&v.to_be_bytes()),
            Argument::String(s) => write_padded_str(packet, s),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing ".0" on whole numbers
            Argument::Float(v) => write!(f, "{:?}", v),
            Argument::Int(v) => write!(f, "{}", v),
            Argument::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<Argument> for OscType {
    fn from(argument: Argument) -> Self {
        match argument {
            Argument::Float(v) => OscType::Float(v),
            Argument::Int(v) => OscType::Int(v),
            Argument::String(s) => OscType::String(s),
        }
    }
}

impl TryFrom<OscType> for Argument {
    type Error = ControlError;

    fn try_from(osc: OscType) -> Result<Self> {
        match osc {
            OscType::Float(f) => Ok(Argument::Float(f)),
            OscType::Int(i) => Ok(Argument::Int(i)),
            OscType::String(s) => Ok(Argument::String(s)),
            other => Err(ControlError::InvalidMessage(format!(
                "Unsupported OSC type: {:?}",
                other
            ))),
        }
    }
}

/// An immutable OSC message: address plus ordered arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    address: String,
    arguments: Vec<Argument>,
}

impl Message {
    /// Create a message, validating the address and string arguments
    pub fn new(address: impl Into<String>, arguments: Vec<Argument>) -> Result<Self> {
        let address = address.into();
        validate_address(&address)?;
        for argument in &arguments {
            if let Argument::String(s) = argument {
                if s.contains('\0') {
                    return Err(ControlError::InvalidMessage(
                        "String argument contains NUL".to_string(),
                    ));
                }
            }
        }
        Ok(Self { address, arguments })
    }

    /// Create a message from parts already known to be well formed
    pub(crate) fn from_parts(address: String, arguments: Vec<Argument>) -> Self {
        debug_assert!(validate_address(&address).is_ok());
        Self { address, arguments }
    }

    /// The address pattern
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The positional arguments
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// OSC type tag string, e.g. `",f"`
    pub fn type_tags(&self) -> String {
        std::iter::once(',')
            .chain(self.arguments.iter().map(Argument::type_tag))
            .collect()
    }

    /// Encode as an OSC 1.0 packet
    ///
    /// Layout: address, type tags, then each argument payload, every field
    /// padded with NULs to a 4-byte boundary. Numbers are big-endian.
    pub fn serialize(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(self.encoded_len());
        write_padded_str(&mut packet, &self.address);
        write_padded_str(&mut packet, &self.type_tags());
        for argument in &self.arguments {
            argument.write_payload(&mut packet);
        }
        packet
    }

    /// Decode a single OSC message from a datagram
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let (_, packet) = rosc::decoder::decode_udp(bytes)
            .map_err(|e| ControlError::OscError(format!("{:?}", e)))?;

        match packet {
            OscPacket::Message(msg) => Self::try_from(msg),
            OscPacket::Bundle(_) => Err(ControlError::InvalidMessage(
                "Expected a message, got a bundle".to_string(),
            )),
        }
    }

    /// Human-readable form for status displays: address followed by arguments
    pub fn status_line(&self) -> String {
        self.to_string()
    }

    fn encoded_len(&self) -> usize {
        let args: usize = self
            .arguments
            .iter()
            .map(|a| match a {
                Argument::String(s) => padded_len(s.len()),
                _ => 4,
            })
            .sum();
        padded_len(self.address.len()) + padded_len(self.arguments.len() + 1) + args
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)?;
        for argument in &self.arguments {
            write!(f, " {}", argument)?;
        }
        Ok(())
    }
}

impl From<Message> for OscMessage {
    fn from(message: Message) -> Self {
        OscMessage {
            addr: message.address,
            args: message.arguments.into_iter().map(OscType::from).collect(),
        }
    }
}

impl TryFrom<OscMessage> for Message {
    type Error = ControlError;

    fn try_from(msg: OscMessage) -> Result<Self> {
        let arguments = msg
            .args
            .into_iter()
            .map(Argument::try_from)
            .collect::<Result<Vec<_>>>()?;
        Message::new(msg.addr, arguments)
    }
}

fn validate_address(address: &str) -> Result<()> {
    if address.len() > MAX_OSC_ADDRESS_LENGTH {
        return Err(ControlError::InvalidMessage(format!(
            "OSC address too long (max {} chars)",
            MAX_OSC_ADDRESS_LENGTH
        )));
    }
    if !address.starts_with('/') {
        return Err(ControlError::InvalidMessage(format!(
            "OSC address must start with '/': {}",
            address
        )));
    }
    if let Some(c) = address
        .chars()
        .find(|c| !c.is_ascii_graphic() || RESERVED_ADDRESS_CHARS.contains(c))
    {
        return Err(ControlError::InvalidMessage(format!(
            "OSC address contains invalid character {:?}: {}",
            c, address
        )));
    }
    Ok(())
}

/// Size of a NUL-terminated string rounded up to 4 bytes
fn padded_len(len: usize) -> usize {
    (len / 4 + 1) * 4
}

fn write_padded_str(packet: &mut Vec<u8>, s: &str) {
    packet.extend_from_slice(s.as_bytes());
    packet.resize(packet.len() + padded_len(s.len()) - s.len(), 0);
}

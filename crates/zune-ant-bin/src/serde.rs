use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_ant::AntHeader;

pub struct Metadata {
    file:   OsString,
    size:   u64,
    header: AntHeader
}

impl Metadata {
    pub fn new(file: OsString, size: u64, header: AntHeader) -> Metadata {
        Metadata { file, size, header }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("AntMetadata", 6)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.header.width)?;
        state.serialize_field("height", &self.header.height)?;
        state.serialize_field("bit_depth", &self.header.bit_depth)?;

        let header_size = self.header.variant().header_size() as u64;
        state.serialize_field("payload_size", &self.size.saturating_sub(header_size))?;

        state.end()
    }
}

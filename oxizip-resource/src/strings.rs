//! String table addressed by byte offset.

use oxizip_core::error::{OxiZipError, Result};

/// A block of NUL-terminated UTF-8 strings, each identified by the offset of
/// its first byte.
///
/// Offsets are `u32`, so no string may start past `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    data: Vec<u8>,
}

impl StringTable {
    /// Wrap raw table bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Append a string and return its offset.
    pub fn add(&mut self, s: &str) -> Result<u32> {
        let offset = to_offset(self.data.len())?;
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(0);
        Ok(offset)
    }

    /// Offset of the first occurrence of `s`, adding it if missing.
    pub fn intern(&mut self, s: &str) -> Result<u32> {
        let mut offset = 0;
        for entry in self.data.split(|&b| b == 0) {
            if entry == s.as_bytes() && offset < self.data.len() {
                return to_offset(offset);
            }
            offset += entry.len() + 1;
        }
        self.add(s)
    }

    /// Look up the string starting at `offset`.
    pub fn get(&self, offset: u32) -> Result<&str> {
        let start = offset as usize;
        let tail = self
            .data
            .get(start..)
            .filter(|tail| !tail.is_empty())
            .ok_or_else(|| OxiZipError::string_not_found(offset))?;
        let len = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        std::str::from_utf8(&tail[..len]).map_err(|_| OxiZipError::string_not_found(offset))
    }

    /// Raw table bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

fn to_offset(pos: usize) -> Result<u32> {
    u32::try_from(pos).map_err(|_| OxiZipError::string_table_full(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut table = StringTable::default();
        let zip = table.add("zip").unwrap();
        let cp = table.add("compact-cp").unwrap();
        assert_eq!(zip, 0);
        assert_eq!(cp, 4);
        assert_eq!(table.get(zip).unwrap(), "zip");
        assert_eq!(table.get(cp).unwrap(), "compact-cp");
        // offsets into the middle of a string are valid suffixes
        assert_eq!(table.get(1).unwrap(), "ip");
    }

    #[test]
    fn test_intern() {
        let mut table = StringTable::default();
        let a = table.intern("zip").unwrap();
        let b = table.intern("other").unwrap();
        assert_eq!(table.intern("zip").unwrap(), a);
        assert_eq!(table.intern("other").unwrap(), b);
        assert_eq!(table.as_bytes(), b"zip\0other\0");
    }

    #[test]
    fn test_out_of_range() {
        let table = StringTable::new(b"zip\0".to_vec());
        assert!(matches!(
            table.get(4),
            Err(OxiZipError::StringNotFound { offset: 4 })
        ));
        assert!(table.get(100).is_err());
    }

    #[test]
    fn test_unterminated_tail() {
        let table = StringTable::new(b"zip".to_vec());
        assert_eq!(table.get(0).unwrap(), "zip");
    }

    #[test]
    fn test_offset_limit() {
        assert_eq!(to_offset(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_offset_past_u32_rejected() {
        let pos = u32::MAX as usize + 1;
        assert!(matches!(
            to_offset(pos),
            Err(OxiZipError::StringTableFull { len }) if len == pos
        ));
    }
}

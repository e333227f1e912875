use bytes::Buf;
use log::warn;
use sha2::{Digest, Sha256};
use std::io::{Cursor, Error, ErrorKind, Read};

const LARGE_LIST_WARNING: usize = 2048;

pub fn hash_256(input: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Length prefixed, big endian binary encoding shared by every type that
/// crosses the node boundary.
pub trait SenoSerialize {
    fn to_bytes(&self) -> Vec<u8>
    where
        Self: Sized;
    fn from_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error>
    where
        Self: Sized;
    /// Decodes a complete value, rejecting any bytes left over.
    fn from_slice(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut cursor = Cursor::new(bytes);
        let value = Self::from_bytes(&mut cursor)?;
        if cursor.has_remaining() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "{} trailing bytes after decoding {}",
                    cursor.remaining(),
                    std::any::type_name::<Self>()
                ),
            ));
        }
        Ok(value)
    }
}

impl SenoSerialize for bool {
    fn to_bytes(&self) -> Vec<u8> {
        vec![*self as u8]
    }
    fn from_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error> {
        let mut bool_buf: [u8; 1] = [0; 1];
        bytes.read_exact(&mut bool_buf)?;
        match bool_buf[0] {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Failed to parse bool, invalid value: {:?}", bool_buf[0]),
            )),
        }
    }
}

impl<T> SenoSerialize for Option<T>
where
    T: SenoSerialize,
{
    fn to_bytes(&self) -> Vec<u8> {
        match self {
            Some(t) => {
                let mut bytes = vec![1u8];
                bytes.extend(t.to_bytes());
                bytes
            }
            None => vec![0u8],
        }
    }
    fn from_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        if bool::from_bytes(bytes)? {
            Ok(Some(T::from_bytes(bytes)?))
        } else {
            Ok(None)
        }
    }
}

impl<T, U> SenoSerialize for (T, U)
where
    T: SenoSerialize,
    U: SenoSerialize,
{
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.0.to_bytes();
        bytes.extend(self.1.to_bytes());
        bytes
    }
    fn from_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        let t = T::from_bytes(bytes)?;
        let u = U::from_bytes(bytes)?;
        Ok((t, u))
    }
}

impl<T> SenoSerialize for Vec<T>
where
    T: SenoSerialize,
{
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend((self.len() as u32).to_be_bytes());
        for e in self {
            bytes.extend(e.to_bytes());
        }
        bytes
    }
    fn from_bytes<B: AsRef<[u8]>>(bytes: &mut Cursor<B>) -> Result<Self, Error> {
        let vec_len = u32::from_bytes(bytes)? as usize;
        // every element occupies at least one byte, so a larger prefix is corrupt
        if vec_len > bytes.remaining() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "List length {vec_len} exceeds the {} remaining bytes",
                    bytes.remaining()
                ),
            ));
        }
        if vec_len > LARGE_LIST_WARNING {
            warn!("Deserializing Large Vec: {vec_len}")
        }
        (0..vec_len).try_fold(Vec::with_capacity(vec_len), |mut vec, _| {
            vec.push(T::from_bytes(bytes)?);
            Ok(vec)
        })
    }
}

macro_rules! impl_primitives {
    ($($name: ident, $size:expr);*) => {
        $(
            impl SenoSerialize for $name {
                fn to_bytes(&self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }
                fn from_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error> {
                    if bytes.remaining() < $size {
                        Err(Error::new(
                            ErrorKind::InvalidInput,
                            format!(
                                "Failed to Parse {}, expected length {}, found {}",
                                stringify!($name),
                                $size,
                                bytes.remaining()
                            ),
                        ))
                    } else {
                        let mut buffer: [u8; $size] = [0; $size];
                        bytes.read_exact(&mut buffer)?;
                        Ok($name::from_be_bytes(buffer))
                    }
                }
            }
        )*
    };
}
impl_primitives!(
    u8, 1;
    u16, 2;
    u32, 4;
    u64, 8;
    u128, 16
);

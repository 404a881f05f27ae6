//! Converter
//!
//! Copies every convertible capability from a source object into a
//! destination object of any other schema.

use confp_capability::catalog::CONFIGURATOR;
use confp_capability::{pair, Configurator, Interface, PairingStatus, WriteError};
use tracing::{debug, trace, warn};

use crate::error::ConvertError;

/// Copy every capability of the full configurator from `src` into `dst`
///
/// # Errors
/// See [`convert_with`].
pub fn convert<S, D>(src: &S, dst: &mut D) -> Result<(), ConvertError>
where
    S: Configurator + ?Sized,
    D: Configurator + ?Sized,
{
    convert_with(&CONFIGURATOR, src, dst)
}

/// Copy every capability of `interface` from `src` into `dst`
///
/// Capabilities are visited in lexical order. The destination is only ever
/// added to: absent source values leave it untouched, and capabilities it
/// cannot store are skipped. Writes performed before an error are kept.
///
/// # Errors
/// - [`ConvertError::IncompatibleCapabilityType`] when the source kind does
///   not fit the destination writer
/// - [`ConvertError::UnrepresentableValue`] when the destination writer
///   rejects a present value
pub fn convert_with<S, D>(interface: &Interface, src: &S, dst: &mut D) -> Result<(), ConvertError>
where
    S: Configurator + ?Sized,
    D: Configurator + ?Sized,
{
    debug!(
        interface = interface.name(),
        source = src.schema(),
        destination = dst.schema(),
        "converting"
    );

    let pairings = pair(interface, src, &*dst);
    let mut written = 0usize;

    for pairing in pairings {
        let name = pairing.name;
        let destination_kind = match pairing.status() {
            PairingStatus::MissingWriter => {
                debug!(capability = name, "destination cannot store capability, skipping");
                continue;
            }
            PairingStatus::MissingReader => {
                trace!(capability = name, "source cannot read capability, skipping");
                continue;
            }
            PairingStatus::Incompatible {
                source,
                destination,
            } => {
                return Err(ConvertError::incompatible(name, source, destination));
            }
            PairingStatus::Convertible { destination } => destination,
        };

        let value = src.read(name);
        if value.is_absent() {
            continue;
        }
        let value = value
            .widen(destination_kind)
            .map_err(|m| ConvertError::incompatible(name, m.found, m.expected))?;

        match dst.write(name, value) {
            Ok(()) => {
                trace!(capability = name, "written");
                written += 1;
            }
            Err(WriteError::Unsupported) => {
                debug!(capability = name, "destination declined capability, skipping");
            }
            Err(WriteError::Rejected { reason }) => {
                warn!(capability = name, %reason, "destination rejected value");
                return Err(ConvertError::unrepresentable(name, reason));
            }
            Err(WriteError::Kind(m)) => {
                return Err(ConvertError::incompatible(name, m.found, m.expected));
            }
        }
    }

    debug!(written, "conversion complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use confp_capability::catalog::{names, CHAIN_IDENTITY};
    use confp_capability::{AccessorTable, Configurable};
    use confp_types::{CapabilityValue, UBig};
    use once_cell::sync::Lazy;

    #[derive(Debug, Default)]
    struct Small {
        chain_id: Option<u64>,
        network_id: Option<u64>,
    }

    static SMALL: Lazy<AccessorTable<Small>> = Lazy::new(|| {
        AccessorTable::new("Small")
            .uint64(
                names::CHAIN_ID,
                |c: &Small| c.chain_id,
                |c: &mut Small, v| c.chain_id = v,
            )
            .uint64(
                names::NETWORK_ID,
                |c: &Small| c.network_id,
                |c: &mut Small, v| c.network_id = v,
            )
    });

    impl Configurable for Small {
        fn accessors() -> &'static AccessorTable<Self> {
            &SMALL
        }
    }

    #[derive(Debug, Default)]
    struct Big {
        chain_id: Option<UBig>,
        network_id: Option<u64>,
        frozen: bool,
    }

    static BIG: Lazy<AccessorTable<Big>> = Lazy::new(|| {
        AccessorTable::new("Big")
            .bigint(
                names::CHAIN_ID,
                |c: &Big| c.chain_id.clone(),
                |c: &mut Big, v| c.chain_id = v,
            )
            .read_u64(names::NETWORK_ID, |c: &Big| c.network_id)
            .write_u64(names::NETWORK_ID, |c: &mut Big, v| {
                if c.frozen && v.is_some() {
                    return Err(WriteError::rejected("frozen"));
                }
                c.network_id = v;
                Ok(())
            })
    });

    impl Configurable for Big {
        fn accessors() -> &'static AccessorTable<Self> {
            &BIG
        }
    }

    #[test]
    fn widens_on_the_way_in() {
        let src = Small {
            chain_id: Some(61),
            network_id: Some(1),
        };
        let mut dst = Big::default();
        convert_with(&CHAIN_IDENTITY, &src, &mut dst).unwrap();
        assert_eq!(dst.chain_id, Some(UBig::from(61u64)));
        assert_eq!(dst.network_id, Some(1));
    }

    #[test]
    fn narrowing_aborts_and_keeps_prior_writes() {
        let src = Big {
            chain_id: Some(UBig::from(61u64)),
            network_id: Some(7),
            frozen: false,
        };
        let mut dst = Small::default();
        let err = convert_with(&CHAIN_IDENTITY, &src, &mut dst).unwrap_err();
        assert_eq!(err.capability(), names::CHAIN_ID);
        // ChainID sorts first, so nothing was written
        assert_eq!(dst.network_id, None);
    }

    #[test]
    fn absent_source_leaves_destination() {
        let src = Small::default();
        let mut dst = Big {
            network_id: Some(99),
            ..Big::default()
        };
        convert(&src, &mut dst).unwrap();
        assert_eq!(dst.network_id, Some(99));
    }

    #[test]
    fn rejection_is_fatal() {
        let src = Small {
            chain_id: Some(3),
            network_id: Some(3),
        };
        let mut dst = Big {
            frozen: true,
            ..Big::default()
        };
        let err = convert(&src, &mut dst).unwrap_err();
        assert_eq!(err, ConvertError::unrepresentable(names::NETWORK_ID, "frozen"));
        // ChainID came first and stays written
        assert_eq!(dst.read(names::CHAIN_ID), CapabilityValue::BigInt(UBig::from(3u64)));
    }
}

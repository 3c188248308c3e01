pub use ethereum_consensus::signing::compute_signing_root;
use ethereum_consensus::{
    domains::DomainType,
    phase0::mainnet::compute_domain,
    primitives::{Domain, Root, Version},
    ssz::prelude::SimpleSerialize,
    state_transition::Context,
    Error,
};

/// The domain an unsigned bid is rooted against: the application-builder
/// domain type folded with the configured genesis fork version and a zero
/// genesis validators root.
pub fn builder_domain(genesis_fork_version: &Version) -> Result<Domain, Error> {
    let context = Context::for_mainnet();
    compute_domain(
        DomainType::ApplicationBuilder,
        Some(genesis_fork_version.clone()),
        Some(Root::default()),
        &context,
    )
}

pub fn compute_builder_signing_root<T: SimpleSerialize>(
    data: &T,
    genesis_fork_version: &Version,
) -> Result<Root, Error> {
    let domain = builder_domain(genesis_fork_version)?;
    compute_signing_root(data, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BidTrace;

    fn fork_version() -> Version {
        Version::try_from([0x00, 0x00, 0x10, 0x20].as_ref()).unwrap()
    }

    #[test]
    fn signing_root_is_deterministic() {
        let message = BidTrace { slot: 42, gas_limit: 30_000_000, ..Default::default() };
        let a = compute_builder_signing_root(&message, &fork_version()).unwrap();
        let b = compute_builder_signing_root(&message, &fork_version()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Root::default());
    }

    #[test]
    fn signing_root_tracks_the_message() {
        let message = BidTrace { slot: 42, ..Default::default() };
        let other = BidTrace { slot: 43, ..Default::default() };
        let a = compute_builder_signing_root(&message, &fork_version()).unwrap();
        let b = compute_builder_signing_root(&other, &fork_version()).unwrap();
        assert_ne!(a, b);
    }
}

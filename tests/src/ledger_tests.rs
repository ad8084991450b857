#[cfg(test)]
mod tests {
    use crate::utils::*;
    use anchor_lang::prelude::*;
    use notary::error::NotaryError;
    use notary::payload::ConsensusPayload;
    use notary::state::ConsensusRecord;

    #[test]
    fn test_record_is_written_once() {
        let mut record = empty_consensus_record();
        record.record(true, 1_700_000_000, [7u8; 32], 254).unwrap();

        assert!(record.recorded);
        assert!(record.global);
        assert_eq!(record.timestamp, 1_700_000_000);
        assert_eq!(record.proof, [7u8; 32]);
        assert_eq!(record.bump, 254);

        // A replay must fail and leave the stored attestation untouched
        let err = record.record(false, 99, [9u8; 32], 250).unwrap_err();
        assert_eq!(err, NotaryError::DuplicateAttestation.into());
        assert!(record.global);
        assert_eq!(record.timestamp, 1_700_000_000);
        assert_eq!(record.proof, [7u8; 32]);
    }

    #[test]
    fn test_record_serialization() {
        let mut record = empty_consensus_record();
        record
            .record(false, u64::MAX, generate_test_hash(b"proof"), 255)
            .unwrap();

        let serialized = record.try_to_vec().unwrap();
        let deserialized = ConsensusRecord::try_from_slice(&serialized).unwrap();

        assert!(deserialized.recorded);
        assert!(!deserialized.global);
        assert_eq!(deserialized.timestamp, u64::MAX);
        assert_eq!(deserialized.proof, generate_test_hash(b"proof"));
    }

    #[test]
    fn test_record_size() {
        let expected = 8 + // discriminator
            1 + // recorded
            1 + // global
            8 + // timestamp
            32 + // proof
            1; // bump
        assert_eq!(ConsensusRecord::SIZE, expected);

        let record = empty_consensus_record();
        assert_eq!(record.try_to_vec().unwrap().len(), ConsensusRecord::SIZE - 8);
    }

    #[test]
    fn test_proof_errors_are_typed() {
        let bad_hex = ConsensusPayload {
            consensus_proof: "zz".repeat(32),
            timestamp: 1,
        };
        let err = bad_hex.proof_bytes().unwrap_err();
        assert_eq!(err, NotaryError::InvalidProofEncoding.into());

        let short = ConsensusPayload {
            consensus_proof: "ab".repeat(8),
            timestamp: 1,
        };
        let err = short.proof_bytes().unwrap_err();
        assert_eq!(err, NotaryError::InvalidProofLength.into());

        let long = ConsensusPayload {
            consensus_proof: "ab".repeat(40),
            timestamp: 1,
        };
        let err = long.proof_bytes().unwrap_err();
        assert_eq!(err, NotaryError::InvalidProofLength.into());
    }

    #[test]
    fn test_proof_prefix_is_optional() {
        let plain = ConsensusPayload {
            consensus_proof: "1b".repeat(32),
            timestamp: 1,
        };
        let prefixed = ConsensusPayload {
            consensus_proof: format!("0x{}", "1b".repeat(32)),
            timestamp: 1,
        };
        assert_eq!(
            plain.proof_bytes().unwrap(),
            prefixed.proof_bytes().unwrap()
        );
        assert_eq!(plain.proof_bytes().unwrap(), [0x1b; 32]);
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use signet_format::{decode_artifact, ArtifactKind, DecodeOptions, Envelope};

fuzz_target!(|data: &[u8]| {
    let Ok(envelope) = Envelope::parse(data) else {
        return;
    };
    for kind in [
        ArtifactKind::SecretKey,
        ArtifactKind::PublicKey,
        ArtifactKind::Signature,
    ] {
        for options in [DecodeOptions::default(), DecodeOptions::strict()] {
            if let Ok(artifact) = decode_artifact(kind, &envelope.payload, &options) {
                assert_eq!(envelope.payload.len(), kind.layout().size());
                assert_eq!(artifact.kind(), kind);
            }
        }
    }
});

//! Round-trip and wire-layout tests for the hand-maintained schema subset.

use relay_tl_types::{enums, functions, types, Deserializable, Identifiable, Serializable};

// ── Handshake constructors ────────────────────────────────────────────────────

#[test]
fn res_pq_roundtrip() {
    let original = types::ResPq {
        nonce: [1u8; 16],
        server_nonce: [2u8; 16],
        pq: vec![0x17, 0xED, 0x48, 0x94, 0x1A, 0x08, 0xF9, 0x81],
        server_public_key_fingerprints: vec![-6438231556514056249],
    };
    let boxed = enums::ResPq::from(original.clone());
    let bytes = boxed.to_bytes();

    // Boxed form starts with the resPQ tag
    assert_eq!(&bytes[..4], &0x05162463u32.to_le_bytes());
    assert_eq!(bytes.len() % 4, 0);

    let decoded = enums::ResPq::from_bytes(&bytes).unwrap();
    assert_eq!(types::ResPq::try_from(decoded).unwrap(), original);
}

#[test]
fn res_pq_reencodes_byte_exact() {
    let boxed = enums::ResPq::from(types::ResPq {
        nonce: [0xAA; 16],
        server_nonce: [0xBB; 16],
        pq: vec![1, 2, 3, 4, 5, 6, 7, 8],
        server_public_key_fingerprints: vec![1, -1, i64::MAX],
    });
    let bytes = boxed.to_bytes();
    let reencoded = enums::ResPq::from_bytes(&bytes).unwrap().to_bytes();
    assert_eq!(reencoded, bytes);
}

#[test]
fn pq_inner_data_variants_roundtrip() {
    let base = types::PQInnerData {
        pq: vec![1, 2, 3, 4, 5, 6, 7, 8],
        p: vec![1, 2, 3, 4],
        q: vec![5, 6, 7, 8],
        nonce: [3u8; 16],
        server_nonce: [4u8; 16],
        new_nonce: [5u8; 32],
    };
    let temp = types::PQInnerDataTemp {
        pq: base.pq.clone(),
        p: base.p.clone(),
        q: base.q.clone(),
        nonce: base.nonce,
        server_nonce: base.server_nonce,
        new_nonce: base.new_nonce,
        expires_in: 86400,
    };

    for boxed in [
        enums::PQInnerData::from(base.clone()),
        enums::PQInnerData::from(temp.clone()),
    ] {
        let bytes = boxed.to_bytes();
        assert_eq!(enums::PQInnerData::from_bytes(&bytes).unwrap(), boxed);
    }

    // The temp variant is distinguished purely by its tag
    let bytes = enums::PQInnerData::from(temp).to_bytes();
    assert_eq!(&bytes[..4], &0x3c6a84d4u32.to_le_bytes());
}

#[test]
fn dh_gen_answers_roundtrip() {
    let nonce = [7u8; 16];
    let server_nonce = [8u8; 16];
    for boxed in [
        enums::SetClientDhParamsAnswer::from(types::DhGenOk {
            nonce,
            server_nonce,
            new_nonce_hash1: [1u8; 16],
        }),
        enums::SetClientDhParamsAnswer::from(types::DhGenRetry {
            nonce,
            server_nonce,
            new_nonce_hash2: [2u8; 16],
        }),
        enums::SetClientDhParamsAnswer::from(types::DhGenFail {
            nonce,
            server_nonce,
            new_nonce_hash3: [3u8; 16],
        }),
    ] {
        let bytes = boxed.to_bytes();
        assert_eq!(
            enums::SetClientDhParamsAnswer::from_bytes(&bytes).unwrap(),
            boxed
        );
    }
}

#[test]
fn unknown_constructor_is_fatal() {
    use relay_tl_types::deserialize::Error;
    let mut bytes = 0xdeadbeefu32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[0u8; 32]);
    assert_eq!(
        enums::ServerDhParams::from_bytes(&bytes),
        Err(Error::UnexpectedConstructor { id: 0xdeadbeef })
    );
}

// ── Functions ─────────────────────────────────────────────────────────────────

#[test]
fn req_pq_multi_serializes_tag_first() {
    let req = functions::ReqPqMulti { nonce: [9u8; 16] };
    let bytes = req.to_bytes();
    assert_eq!(&bytes[..4], &0xbe7e8ef1u32.to_le_bytes());
    assert_eq!(bytes.len(), 20);
}

#[test]
fn function_deserialize_skips_tag() {
    // The dispatcher consumes the tag; deserialize starts at the fields.
    let req = functions::SetClientDhParams {
        nonce: [1u8; 16],
        server_nonce: [2u8; 16],
        encrypted_data: vec![0u8; 16],
    };
    let bytes = req.to_bytes();
    let decoded = functions::SetClientDhParams::from_bytes(&bytes[4..]).unwrap();
    assert_eq!(decoded, req);
}

#[test]
fn bind_temp_auth_key_roundtrip() {
    let req = functions::auth::BindTempAuthKey {
        perm_auth_key_id: 0x1122334455667788,
        nonce: -5,
        expires_at: 1_700_000_000,
        encrypted_message: vec![0xCC; 48],
    };
    let bytes = req.to_bytes();
    assert_eq!(&bytes[..4], &0xcdd42a05u32.to_le_bytes());
    let decoded = functions::auth::BindTempAuthKey::from_bytes(&bytes[4..]).unwrap();
    assert_eq!(decoded, req);
}

// ── RPC envelopes ─────────────────────────────────────────────────────────────

#[test]
fn rpc_result_payload_is_bare() {
    let payload = true.to_bytes();
    let envelope = enums::RpcResult::from(types::RpcResult {
        req_msg_id: 0x0102030405060708,
        result: payload.clone(),
    });
    let bytes = envelope.to_bytes();

    assert_eq!(&bytes[..4], &0xf35c6d01u32.to_le_bytes());
    assert_eq!(&bytes[4..12], &0x0102030405060708i64.to_le_bytes());
    // The payload is appended raw, with no length prefix
    assert_eq!(&bytes[12..], payload.as_slice());

    let decoded = enums::RpcResult::from_bytes(&bytes).unwrap();
    let enums::RpcResult::RpcResult(inner) = decoded;
    assert_eq!(inner.result, payload);
}

#[test]
fn rpc_error_roundtrip() {
    let envelope = enums::RpcError::from(types::RpcError {
        error_code: 400,
        error_message: "PHONE_CODE_INVALID".to_owned(),
    });
    let bytes = envelope.to_bytes();
    assert_eq!(&bytes[..4], &0x2144ca19u32.to_le_bytes());
    assert_eq!(enums::RpcError::from_bytes(&bytes).unwrap(), envelope);
}

// ── Flags bitfields ───────────────────────────────────────────────────────────

fn plain_dc_option() -> types::DcOption {
    types::DcOption {
        ipv6: false,
        media_only: false,
        tcpo_only: false,
        cdn: false,
        r#static: false,
        this_port_only: false,
        id: 2,
        ip_address: "149.154.167.50".to_owned(),
        port: 443,
        secret: None,
    }
}

#[test]
fn dc_option_clear_flags_emit_nothing() {
    let opt = plain_dc_option();
    let bytes = opt.to_bytes();
    // flags word is zero and the secret field is absent
    assert_eq!(&bytes[..4], &0u32.to_le_bytes());
    let decoded = types::DcOption::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, opt);
    assert_eq!(decoded.secret, None);
}

#[test]
fn dc_option_set_flags_roundtrip() {
    let opt = types::DcOption {
        ipv6: true,
        cdn: true,
        secret: Some(vec![0xDD; 16]),
        ..plain_dc_option()
    };
    let bytes = opt.to_bytes();
    let flags = u32::from_le_bytes(bytes[..4].try_into().unwrap());
    assert_eq!(flags, (1 << 0) | (1 << 3) | (1 << 10));
    assert_eq!(types::DcOption::from_bytes(&bytes).unwrap(), opt);
}

#[test]
fn dc_option_conditional_field_consumes_no_bytes_when_clear() {
    let with_secret = types::DcOption {
        secret: Some(vec![1, 2, 3]),
        ..plain_dc_option()
    };
    let without_secret = plain_dc_option();
    let longer = with_secret.to_bytes();
    let shorter = without_secret.to_bytes();
    assert!(longer.len() > shorter.len());
    // Re-encoding either form is byte-exact
    assert_eq!(types::DcOption::from_bytes(&longer).unwrap().to_bytes(), longer);
    assert_eq!(types::DcOption::from_bytes(&shorter).unwrap().to_bytes(), shorter);
}

// ── Alignment invariant ───────────────────────────────────────────────────────

#[test]
fn encoded_records_are_word_aligned() {
    let samples: Vec<Vec<u8>> = vec![
        enums::ResPq::from(types::ResPq {
            nonce: [0; 16],
            server_nonce: [0; 16],
            pq: vec![1, 2, 3, 4, 5, 6, 7],
            server_public_key_fingerprints: vec![7],
        })
        .to_bytes(),
        functions::ReqDhParams {
            nonce: [0; 16],
            server_nonce: [0; 16],
            p: vec![1, 2, 3, 4],
            q: vec![5, 6, 7, 8],
            public_key_fingerprint: 1,
            encrypted_data: vec![0; 256],
        }
        .to_bytes(),
        enums::DestroyAuthKeyRes::Ok.to_bytes(),
        types::DcOption {
            secret: Some(vec![9; 5]),
            ..plain_dc_option()
        }
        .to_bytes(),
    ];
    for bytes in samples {
        assert_eq!(bytes.len() % 4, 0, "serialized length must be a multiple of 4");
    }
}

#[test]
fn constructor_ids_match_schema() {
    assert_eq!(types::ResPq::CONSTRUCTOR_ID, 0x05162463);
    assert_eq!(types::ServerDhInnerData::CONSTRUCTOR_ID, 0xb5890dba);
    assert_eq!(types::ClientDhInnerData::CONSTRUCTOR_ID, 0x6643b654);
    assert_eq!(functions::ReqDhParams::CONSTRUCTOR_ID, 0xd712e4be);
    assert_eq!(functions::Ping::CONSTRUCTOR_ID, 0x7abe77ec);
    assert_eq!(types::Pong::CONSTRUCTOR_ID, 0x347773c5);
}

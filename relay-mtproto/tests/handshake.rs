//! End-to-end key exchange: an in-process client drives the server state
//! machine through the full `req_pq_multi` → `set_client_DH_params` flow.

use std::time::Duration;

use num_bigint::BigUint;
use relay_crypto::{AuthKey, aes, factorize, generate_key_data_from_nonce, prime, rsa};
use relay_mtproto::config::ServerConfig;
use relay_mtproto::handshake::{Error, Handshake, ReqPqOutcome};
use relay_mtproto::store::{AuthKeyStore, MemoryStore, StoreError};
use relay_tl_types::{Serializable, enums, functions, types};
use sha1::{Digest, Sha1};

// 2048-bit test key; never deployed anywhere.
const TEST_N: &str = "26102568601059535345439120040009417633177296913151205477296407798193423436931119685865972273813245068772736404893762790097814453506891196657115022974183968430013219991652112667745606911733379866399271735327779189038414816940105390370407425119199940620197951366752875233223710529450383731482808002398389687186501693784223690741015719231872627316814584146853191295670033897745252182591530249932441765742215009611114667256441665531273257877065681683477436628823720701175855178854640987188270837374345092448433278107781654394669331390386966235467259172158146361144804211613306319563704586015891328014339949037899662464533";
const TEST_E: &str = "65537";
const TEST_D: &str = "19282293264615336141091965126523581120207096380005024806938843565221755784551418242394819959597183781901742337460087247768519937403743282478003411923786082115480263354377736707258007956082031821291605391190072384743225605879447064467438770042812864873974143148429237662176472799522123801704032589531306589037405653247129903533875295855384562034917072469707825212343545717870058977953328166583206525238837727814983583466245165718466299626457221035042628191343183957287129166853292024237111694186625991203894406705594512992066717399263165294298609135986452555761695006498711016051696141180249054230251540927531661469473";

fn test_config() -> ServerConfig {
    let key = rsa::PrivateKey::new(TEST_N, TEST_E, TEST_D).unwrap();
    ServerConfig::new(vec![key])
}

fn sha1_of(data: &[u8]) -> [u8; 20] {
    let mut sha = Sha1::new();
    sha.update(data);
    sha.finalize().into()
}

// ─── In-process client ───────────────────────────────────────────────────────

struct ClientAfterPq {
    nonce: [u8; 16],
    server_nonce: [u8; 16],
    new_nonce: [u8; 32],
}

struct ClientAfterDh {
    new_nonce: [u8; 32],
    gab: BigUint,
}

fn client_nonce() -> [u8; 16] {
    let mut nonce = [0u8; 16];
    prime::random_bytes(&mut nonce);
    nonce
}

/// Solve the PQ challenge and produce `req_DH_params`.
fn client_req_dh_params(
    nonce: [u8; 16],
    response: &enums::ResPq,
    inner: impl FnOnce(types::PQInnerData) -> enums::PQInnerData,
) -> (functions::ReqDhParams, ClientAfterPq) {
    let enums::ResPq::ResPq(res_pq) = response;
    assert_eq!(res_pq.nonce, nonce, "resPQ must echo the client nonce");
    assert_eq!(res_pq.pq.len(), 8);

    let pq = u64::from_be_bytes(res_pq.pq.as_slice().try_into().unwrap());
    let (p, q) = factorize(pq);
    assert!(p < q);

    let trim_be = |v: u64| {
        let b = v.to_be_bytes();
        let skip = b.iter().position(|&x| x != 0).unwrap_or(7);
        b[skip..].to_vec()
    };

    let mut new_nonce = [0u8; 32];
    prime::random_bytes(&mut new_nonce);

    let inner_bytes = inner(types::PQInnerData {
        pq: pq.to_be_bytes().to_vec(),
        p: trim_be(p),
        q: trim_be(q),
        nonce,
        server_nonce: res_pq.server_nonce,
        new_nonce,
    })
    .to_bytes();

    let fingerprint = res_pq.server_public_key_fingerprints[0];
    let public = rsa::Key::new(TEST_N, TEST_E).unwrap();
    assert_eq!(public.fingerprint(), fingerprint);

    let mut rnd = [0u8; 224];
    prime::random_bytes(&mut rnd);
    let encrypted_data = rsa::encrypt_hashed(&inner_bytes, &public, &rnd);

    (
        functions::ReqDhParams {
            nonce,
            server_nonce: res_pq.server_nonce,
            p: trim_be(p),
            q: trim_be(q),
            public_key_fingerprint: fingerprint,
            encrypted_data,
        },
        ClientAfterPq { nonce, server_nonce: res_pq.server_nonce, new_nonce },
    )
}

/// Decrypt the DH answer and produce `set_client_DH_params`.
fn client_set_dh_params(
    state: ClientAfterPq,
    response: enums::ServerDhParams,
) -> (functions::SetClientDhParams, ClientAfterDh) {
    let mut ok = match response {
        enums::ServerDhParams::Ok(x) => x,
        enums::ServerDhParams::Fail(f) => panic!("unexpected server_DH_params_fail: {f:?}"),
    };
    assert_eq!(ok.nonce, state.nonce);
    assert_eq!(ok.server_nonce, state.server_nonce);
    assert_eq!(ok.encrypted_answer.len() % 16, 0);

    let (key, iv) = generate_key_data_from_nonce(&state.server_nonce, &state.new_nonce);
    aes::ige_decrypt(&mut ok.encrypted_answer, &key, &iv);
    let plain = ok.encrypted_answer;

    let inner = {
        let mut cursor = relay_tl_types::Cursor::from_slice(&plain[20..]);
        use relay_tl_types::Deserializable;
        let enums::ServerDhInnerData::ServerDhInnerData(inner) =
            enums::ServerDhInnerData::deserialize(&mut cursor).unwrap();
        assert_eq!(&plain[..20], &sha1_of(&plain[20..20 + cursor.pos()]));
        inner
    };
    assert_eq!(inner.nonce, state.nonce);
    assert_eq!(inner.server_nonce, state.server_nonce);

    let dh_prime = BigUint::from_bytes_be(&inner.dh_prime);
    let g = BigUint::from(inner.g as u32);
    let g_a = BigUint::from_bytes_be(&inner.g_a);

    let mut b_bytes = [0u8; 256];
    prime::random_bytes(&mut b_bytes);
    let b = BigUint::from_bytes_be(&b_bytes);
    let g_b = g.modpow(&b, &dh_prime);
    let gab = g_a.modpow(&b, &dh_prime);

    let request = encrypt_client_dh(&state, g_b.to_bytes_be());
    (request, ClientAfterDh { new_nonce: state.new_nonce, gab })
}

/// Build `set_client_DH_params` around an arbitrary `g_b` value.
fn encrypt_client_dh(state: &ClientAfterPq, g_b: Vec<u8>) -> functions::SetClientDhParams {
    let inner_bytes = enums::ClientDhInnerData::from(types::ClientDhInnerData {
        nonce: state.nonce,
        server_nonce: state.server_nonce,
        retry_id: 0,
        g_b,
    })
    .to_bytes();

    let digest = sha1_of(&inner_bytes);
    let pad_len = (16 - ((20 + inner_bytes.len()) % 16)) % 16;

    let mut payload = Vec::with_capacity(20 + inner_bytes.len() + pad_len);
    payload.extend_from_slice(&digest);
    payload.extend_from_slice(&inner_bytes);
    payload.extend(std::iter::repeat(0xaa).take(pad_len));

    let (key, iv) = generate_key_data_from_nonce(&state.server_nonce, &state.new_nonce);
    aes::ige_encrypt(&mut payload, &key, &iv);

    functions::SetClientDhParams {
        nonce: state.nonce,
        server_nonce: state.server_nonce,
        encrypted_data: payload,
    }
}

fn expect_reply(outcome: ReqPqOutcome) -> (enums::ResPq, Duration) {
    match outcome {
        ReqPqOutcome::Reply { response, delay } => (response, delay),
        ReqPqOutcome::Drop => panic!("expected a resPQ reply"),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[test]
fn full_exchange_produces_matching_keys() {
    let config = test_config();
    let store = MemoryStore::new();
    let mut handshake = Handshake::new(&config);

    let nonce = client_nonce();
    let (res_pq, delay) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
    assert_eq!(delay, config.first_req_pq_delay);

    let (req_dh, client) = client_req_dh_params(nonce, &res_pq, enums::PQInnerData::PQInnerData);
    let dh_params = handshake.handle_req_dh_params(&req_dh).unwrap();

    let (set_dh, client) = client_set_dh_params(client, dh_params);
    let answer = handshake.handle_set_client_dh_params(&store, &set_dh).unwrap();

    let server_key = handshake.auth_key().expect("handshake completed").clone();

    // Both sides derived the same key.
    let mut client_key = [0u8; 256];
    let gab = client.gab.to_bytes_be();
    client_key[256 - gab.len()..].copy_from_slice(&gab);
    let client_key = AuthKey::from_bytes(client_key);
    assert_eq!(server_key, client_key);

    // The reply authenticates the key to the client.
    match answer {
        enums::SetClientDhParamsAnswer::DhGenOk(ok) => {
            assert_eq!(ok.nonce, nonce);
            assert_eq!(
                ok.new_nonce_hash1,
                client_key.calc_new_nonce_hash(&client.new_nonce, 1)
            );
        }
        other => panic!("expected dh_gen_ok, got {other:?}"),
    }

    // Persisted in truncated form under the fingerprint.
    let stored = store.auth_key(server_key.fingerprint()).unwrap().unwrap();
    assert_eq!(stored, server_key.stored_bytes());
    assert!(store.temp_auth_key(server_key.fingerprint()).unwrap().is_none());
}

#[test]
fn temp_inner_data_yields_temporary_key() {
    let config = test_config();
    let store = MemoryStore::new();
    let mut handshake = Handshake::new(&config);

    let nonce = client_nonce();
    let (res_pq, _) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));

    let (req_dh, client) = client_req_dh_params(nonce, &res_pq, |inner| {
        enums::PQInnerData::Temp(types::PQInnerDataTemp {
            pq: inner.pq,
            p: inner.p,
            q: inner.q,
            nonce: inner.nonce,
            server_nonce: inner.server_nonce,
            new_nonce: inner.new_nonce,
            expires_in: 3600,
        })
    });
    let dh_params = handshake.handle_req_dh_params(&req_dh).unwrap();
    let (set_dh, _) = client_set_dh_params(client, dh_params);

    let answer = handshake.handle_set_client_dh_params(&store, &set_dh).unwrap();
    assert!(matches!(answer, enums::SetClientDhParamsAnswer::DhGenOk(_)));

    let key_id = handshake.auth_key().unwrap().fingerprint();
    assert!(store.temp_auth_key(key_id).unwrap().is_some());
    assert!(store.auth_key(key_id).unwrap().is_none());
    assert!(store.bound_auth_key(key_id).unwrap().is_none());
}

#[test]
fn req_pq_retry_is_idempotent_and_undelayed() {
    let config = test_config();
    let mut handshake = Handshake::new(&config);

    let nonce = client_nonce();
    let (first, delay) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
    assert!(delay > Duration::ZERO);

    let (second, delay) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
    assert_eq!(delay, Duration::ZERO);
    assert_eq!(first, second);
}

#[test]
fn req_pq_nonce_mismatch_drops_and_resets() {
    let config = test_config();
    let mut handshake = Handshake::new(&config);

    let nonce = client_nonce();
    let (res_pq, _) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));

    let other = client_nonce();
    assert!(matches!(
        handshake.handle_req_pq(&functions::ReqPqMulti { nonce: other }),
        ReqPqOutcome::Drop
    ));

    // The in-flight scratch is gone: the old challenge can no longer be
    // answered.
    let (req_dh, _) = client_req_dh_params(nonce, &res_pq, enums::PQInnerData::PQInnerData);
    assert!(matches!(
        handshake.handle_req_dh_params(&req_dh),
        Err(Error::UnexpectedState { .. })
    ));
}

#[test]
fn out_of_order_requests_are_hard_errors() {
    let config = test_config();
    let store = MemoryStore::new();
    let mut handshake = Handshake::new(&config);

    let req = functions::SetClientDhParams {
        nonce: client_nonce(),
        server_nonce: [0u8; 16],
        encrypted_data: vec![0u8; 32],
    };
    assert!(matches!(
        handshake.handle_set_client_dh_params(&store, &req),
        Err(Error::UnexpectedState { .. })
    ));
}

#[test]
fn unknown_fingerprint_is_rejected() {
    let config = test_config();
    let mut handshake = Handshake::new(&config);

    let nonce = client_nonce();
    let (res_pq, _) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
    let (mut req_dh, _) = client_req_dh_params(nonce, &res_pq, enums::PQInnerData::PQInnerData);
    req_dh.public_key_fingerprint ^= 1;

    assert!(matches!(
        handshake.handle_req_dh_params(&req_dh),
        Err(Error::UnknownFingerprint { .. })
    ));
}

#[test]
fn g_b_on_safety_band_edges_fails_key_exchange() {
    for lower_edge in [true, false] {
        let config = test_config();
        let store = MemoryStore::new();
        let mut handshake = Handshake::new(&config);

        let nonce = client_nonce();
        let (res_pq, _) =
            expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
        let (req_dh, client) =
            client_req_dh_params(nonce, &res_pq, enums::PQInnerData::PQInnerData);
        handshake.handle_req_dh_params(&req_dh).unwrap();

        // The band is exclusive: both edges are rejected.
        let edge: BigUint = if lower_edge {
            BigUint::from(1u32) << (2048 - 64)
        } else {
            config.dh.prime() - (BigUint::from(1u32) << (2048 - 64))
        };
        let request = encrypt_client_dh(&client, edge.to_bytes_be());

        let answer = handshake.handle_set_client_dh_params(&store, &request).unwrap();
        match answer {
            enums::SetClientDhParamsAnswer::DhGenFail(fail) => {
                assert_eq!(fail.nonce, nonce);
                assert_eq!(fail.server_nonce, client.server_nonce);
            }
            other => panic!("expected dh_gen_fail, got {other:?}"),
        }
        assert!(handshake.auth_key().is_none());
    }
}

#[test]
fn tampered_client_dh_data_is_a_hard_error() {
    let config = test_config();
    let store = MemoryStore::new();
    let mut handshake = Handshake::new(&config);

    let nonce = client_nonce();
    let (res_pq, _) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
    let (req_dh, client) = client_req_dh_params(nonce, &res_pq, enums::PQInnerData::PQInnerData);
    let dh_params = handshake.handle_req_dh_params(&req_dh).unwrap();

    let (mut set_dh, _) = client_set_dh_params(client, dh_params);
    let last = set_dh.encrypted_data.len() - 1;
    set_dh.encrypted_data[last] ^= 0xff;

    assert!(handshake.handle_set_client_dh_params(&store, &set_dh).is_err());
}

// ─── Store interaction ───────────────────────────────────────────────────────

/// Pretends every key id is already taken.
struct SaturatedStore;

impl AuthKeyStore for SaturatedStore {
    fn auth_key(&self, _: i64) -> Result<Option<[u8; 192]>, StoreError> {
        Ok(None)
    }
    fn put_auth_key(&self, _: i64, _: [u8; 192]) -> Result<bool, StoreError> {
        Ok(false)
    }
    fn temp_auth_key(&self, _: i64) -> Result<Option<[u8; 192]>, StoreError> {
        Ok(None)
    }
    fn put_temp_auth_key(&self, _: i64, _: [u8; 192], _: Duration) -> Result<bool, StoreError> {
        Ok(false)
    }
    fn bound_auth_key(&self, _: i64) -> Result<Option<i64>, StoreError> {
        Ok(None)
    }
    fn bind_auth_key(&self, _: i64, _: i64, _: Duration) -> Result<bool, StoreError> {
        Ok(false)
    }
    fn delete_auth_key(&self, _: i64) -> Result<bool, StoreError> {
        Ok(false)
    }
}

/// A backend that is down.
struct BrokenStore;

impl AuthKeyStore for BrokenStore {
    fn auth_key(&self, _: i64) -> Result<Option<[u8; 192]>, StoreError> {
        Err(StoreError::new("backend down"))
    }
    fn put_auth_key(&self, _: i64, _: [u8; 192]) -> Result<bool, StoreError> {
        Err(StoreError::new("backend down"))
    }
    fn temp_auth_key(&self, _: i64) -> Result<Option<[u8; 192]>, StoreError> {
        Err(StoreError::new("backend down"))
    }
    fn put_temp_auth_key(&self, _: i64, _: [u8; 192], _: Duration) -> Result<bool, StoreError> {
        Err(StoreError::new("backend down"))
    }
    fn bound_auth_key(&self, _: i64) -> Result<Option<i64>, StoreError> {
        Err(StoreError::new("backend down"))
    }
    fn bind_auth_key(&self, _: i64, _: i64, _: Duration) -> Result<bool, StoreError> {
        Err(StoreError::new("backend down"))
    }
    fn delete_auth_key(&self, _: i64) -> Result<bool, StoreError> {
        Err(StoreError::new("backend down"))
    }
}

fn run_to_set_client_dh(
    handshake: &mut Handshake<'_>,
) -> (functions::SetClientDhParams, ClientAfterDh) {
    let nonce = client_nonce();
    let (res_pq, _) = expect_reply(handshake.handle_req_pq(&functions::ReqPqMulti { nonce }));
    let (req_dh, client) = client_req_dh_params(nonce, &res_pq, enums::PQInnerData::PQInnerData);
    let dh_params = handshake.handle_req_dh_params(&req_dh).unwrap();
    client_set_dh_params(client, dh_params)
}

#[test]
fn existing_key_id_requests_retry() {
    let config = test_config();
    let mut handshake = Handshake::new(&config);
    let (set_dh, client) = run_to_set_client_dh(&mut handshake);

    let answer = handshake.handle_set_client_dh_params(&SaturatedStore, &set_dh).unwrap();
    match answer {
        enums::SetClientDhParamsAnswer::DhGenRetry(retry) => {
            // hash2 binds the retry to the candidate key.
            let mut key = [0u8; 256];
            let gab = client.gab.to_bytes_be();
            key[256 - gab.len()..].copy_from_slice(&gab);
            let candidate = AuthKey::from_bytes(key);
            assert_eq!(
                retry.new_nonce_hash2,
                candidate.calc_new_nonce_hash(&client.new_nonce, 2)
            );
        }
        other => panic!("expected dh_gen_retry, got {other:?}"),
    }

    // The exchange is still open for another attempt.
    assert!(handshake.auth_key().is_none());
    let answer = handshake.handle_set_client_dh_params(&SaturatedStore, &set_dh).unwrap();
    assert!(matches!(answer, enums::SetClientDhParamsAnswer::DhGenRetry(_)));
}

#[test]
fn store_failure_propagates_without_commit() {
    let config = test_config();
    let mut handshake = Handshake::new(&config);
    let (set_dh, _) = run_to_set_client_dh(&mut handshake);

    assert!(matches!(
        handshake.handle_set_client_dh_params(&BrokenStore, &set_dh),
        Err(Error::Store(_))
    ));

    // No partial state: the same request succeeds once the store recovers.
    let store = MemoryStore::new();
    let answer = handshake.handle_set_client_dh_params(&store, &set_dh).unwrap();
    assert!(matches!(answer, enums::SetClientDhParamsAnswer::DhGenOk(_)));
}

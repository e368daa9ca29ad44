//! HTTP Digest access authentication (RFC 2617, MD5, `qop=auth`)
//!
//! Both Atlas and Ops Manager authenticate programmatic API keys with digest
//! auth: the public key is the username and the private key the password.

use crate::infrastructure::{InfraError, InfraResult};

/// Username/password pair used to answer digest challenges.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Parsed `WWW-Authenticate: Digest ...` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestChallenge {
    pub realm: String,
    pub nonce: String,
    pub opaque: Option<String>,
    pub algorithm: Option<String>,
    /// `true` when the server offers `qop=auth`.
    pub qop_auth: bool,
}

impl DigestChallenge {
    pub fn parse(header: &str) -> InfraResult<Self> {
        let header = header.trim();
        let params = match header.split_once(char::is_whitespace) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("digest") => rest,
            _ => {
                return Err(InfraError::Digest(format!(
                    "unsupported challenge: {header}"
                )))
            }
        };

        let mut realm = None;
        let mut nonce = None;
        let mut opaque = None;
        let mut algorithm = None;
        let mut qop_auth = false;

        for (key, value) in split_params(params) {
            match key.to_ascii_lowercase().as_str() {
                "realm" => realm = Some(value),
                "nonce" => nonce = Some(value),
                "opaque" => opaque = Some(value),
                "algorithm" => algorithm = Some(value),
                "qop" => qop_auth = value.split(',').any(|q| q.trim() == "auth"),
                _ => {}
            }
        }

        if let Some(alg) = &algorithm {
            if !alg.eq_ignore_ascii_case("MD5") {
                return Err(InfraError::Digest(format!("unsupported algorithm: {alg}")));
            }
        }

        Ok(Self {
            realm: realm.ok_or_else(|| InfraError::Digest("challenge without realm".into()))?,
            nonce: nonce.ok_or_else(|| InfraError::Digest("challenge without nonce".into()))?,
            opaque,
            algorithm,
            qop_auth,
        })
    }

    /// Request digest for `method uri`.
    pub fn response(
        &self,
        credentials: &Credentials,
        method: &str,
        uri: &str,
        cnonce: &str,
        nc: u32,
    ) -> String {
        let ha1 = md5_hex(&format!(
            "{}:{}:{}",
            credentials.username, self.realm, credentials.password
        ));
        let ha2 = md5_hex(&format!("{method}:{uri}"));
        if self.qop_auth {
            md5_hex(&format!(
                "{ha1}:{}:{nc:08x}:{cnonce}:auth:{ha2}",
                self.nonce
            ))
        } else {
            md5_hex(&format!("{ha1}:{}:{ha2}", self.nonce))
        }
    }

    /// Value for the `Authorization` header answering this challenge.
    pub fn authorization(
        &self,
        credentials: &Credentials,
        method: &str,
        uri: &str,
        cnonce: &str,
        nc: u32,
    ) -> String {
        let response = self.response(credentials, method, uri, cnonce, nc);
        let mut header = format!(
            r#"Digest username="{}", realm="{}", nonce="{}", uri="{}", response="{}""#,
            credentials.username, self.realm, self.nonce, uri, response
        );
        if let Some(alg) = &self.algorithm {
            header.push_str(&format!(", algorithm={alg}"));
        }
        if self.qop_auth {
            header.push_str(&format!(r#", qop=auth, nc={nc:08x}, cnonce="{cnonce}""#));
        }
        if let Some(opaque) = &self.opaque {
            header.push_str(&format!(r#", opaque="{opaque}""#));
        }
        header
    }
}

/// Fresh client nonce.
pub fn cnonce() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Split `k=v, k="v, with comma"` into pairs, honoring quotes.
fn split_params(input: &str) -> Vec<(String, String)> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parts.push(current);

    parts
        .iter()
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

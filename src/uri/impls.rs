use super::{Components, Credentials, IntoUri, Sealed, Uri, UriError, default_port, split};
use crate::log::debug;
use crate::query::{self, QueryMap};

const DEFAULT_SCHEME: &str = "https";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PATH: &str = "/";

impl Credentials {
    /// Create new [`Credentials`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `user` is empty.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Result<Self, UriError> {
        let user = user.into();
        if user.is_empty() {
            return Err(UriError::Credentials);
        }
        Ok(Self {
            user,
            password: password.into(),
        })
    }

    #[inline]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password, empty if none given.
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Uri {
    /// Create new [`Uri`].
    ///
    /// When `port` is [`None`], it defaults by scheme. `query` is a raw query string without the
    /// leading `?`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `scheme` is empty or `query` nests brackets too deep.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        path: impl Into<String>,
        query: &str,
    ) -> Result<Self, UriError> {
        let scheme = scheme.into();
        if scheme.is_empty() {
            return Err(UriError::Scheme);
        }
        let port = port.unwrap_or_else(|| default_port(&scheme));
        Ok(Self {
            scheme,
            host: host.into(),
            port,
            credentials: None,
            path: path.into(),
            query: query::decode(query)?,
            fragment: String::new(),
        })
    }

    /// Parse [`Uri`] from string.
    ///
    /// Missing components take the defaults of [`Uri::from_components`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the string cannot be split into URI components, see [`split`].
    pub fn parse(url: &str) -> Result<Self, UriError> {
        match split(url) {
            Ok(parts) => Self::from_components(parts),
            Err(err) => {
                debug!("rejected url {url:?}: {err}");
                Err(err)
            }
        }
    }

    /// Returns [`Uri`] from either an existing [`Uri`] or a URI string.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if a string is given that cannot be parsed.
    #[inline]
    pub fn from_url(url: impl IntoUri) -> Result<Self, UriError> {
        Sealed::into_uri(url)
    }

    /// Build [`Uri`] from components.
    ///
    /// Absent components default to:
    ///
    /// | component | default     |
    /// |-----------|-------------|
    /// | scheme    | `https`     |
    /// | host      | `localhost` |
    /// | port      | by scheme   |
    /// | path      | `/`         |
    /// | query     | empty       |
    /// | fragment  | empty       |
    ///
    /// Credentials are only set when `user` is not empty, the password alone is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `scheme` is empty or `query` nests brackets too deep.
    pub fn from_components(parts: Components<'_>) -> Result<Self, UriError> {
        let mut uri = Self::new(
            parts.scheme.unwrap_or(DEFAULT_SCHEME),
            parts.host.unwrap_or(DEFAULT_HOST),
            parts.port,
            parts.path.unwrap_or(DEFAULT_PATH),
            parts.query.unwrap_or_default(),
        )?;

        if let Some(user) = parts.user.filter(|user| !user.is_empty()) {
            uri.credentials = Some(Credentials::new(user, parts.password.unwrap_or_default())?);
        }

        if let Some(fragment) = parts.fragment.filter(|fragment| !fragment.is_empty()) {
            uri.fragment = fragment.trim_start_matches('#').to_owned();
        }

        Ok(uri)
    }

    // ===== Accessors =====

    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[inline]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the user, empty if none.
    #[inline]
    pub fn user(&self) -> &str {
        self.credentials.as_ref().map_or("", Credentials::user)
    }

    /// Returns the password, empty if none.
    #[inline]
    pub fn password(&self) -> &str {
        self.credentials.as_ref().map_or("", Credentials::password)
    }

    /// Returns the path as written, e.g: `/over/there`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    /// Returns the fragment without the leading `#`.
    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the authority, e.g: `user:pass@example.com:8080`.
    ///
    /// Port is omitted when it is the scheme default.
    pub fn authority(&self) -> String {
        let mut out = String::new();
        self.write_authority(&mut out);
        out
    }

    fn write_authority(&self, out: &mut String) {
        if let Some(credentials) = &self.credentials {
            out.push_str(&credentials.user);
            if !credentials.password.is_empty() {
                out.push(':');
                out.push_str(&credentials.password);
            }
            out.push('@');
        }
        out.push_str(&self.host);
        if self.port != default_port(&self.scheme) {
            out.push(':');
            out.push_str(itoa::Buffer::new().format(self.port));
        }
    }

    // ===== Copy =====

    /// Returns a copy with the scheme replaced.
    ///
    /// Port is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `scheme` is empty.
    pub fn with_scheme(&self, scheme: impl Into<String>) -> Result<Self, UriError> {
        let scheme = scheme.into();
        if scheme.is_empty() {
            return Err(UriError::Scheme);
        }
        Ok(Self { scheme, ..self.clone() })
    }

    #[inline]
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self { host: host.into(), ..self.clone() }
    }

    #[inline]
    pub fn with_port(&self, port: u16) -> Self {
        Self { port, ..self.clone() }
    }

    #[inline]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self { path: path.into(), ..self.clone() }
    }

    #[inline]
    pub fn with_query(&self, query: QueryMap) -> Self {
        Self { query, ..self.clone() }
    }

    /// Returns a copy with the fragment replaced, leading `#` are stripped.
    #[inline]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        Self {
            fragment: fragment.trim_start_matches('#').to_owned(),
            ..self.clone()
        }
    }

    /// Returns a copy with the credentials replaced.
    ///
    /// Both empty removes the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `password` is given without `user`.
    pub fn with_credentials(&self, user: &str, password: &str) -> Result<Self, UriError> {
        let credentials = match (user.is_empty(), password.is_empty()) {
            (true, true) => None,
            _ => Some(Credentials::new(user, password)?),
        };
        Ok(Self { credentials, ..self.clone() })
    }

    /// Returns a copy without user and password.
    #[inline]
    pub fn strip_credentials(&self) -> Self {
        Self { credentials: None, ..self.clone() }
    }
}

// ===== Conversion =====

impl std::str::FromStr for Uri {
    type Err = UriError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = UriError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// ===== Formatting =====

impl std::fmt::Display for Uri {
    /// `scheme://authority path ?query #fragment`, query and fragment only when not empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.scheme.len() + self.host.len() + self.path.len() + 8);
        out.push_str(&self.scheme);
        out.push_str("://");
        self.write_authority(&mut out);
        out.push_str(&self.path);

        let query = query::encode(&self.query);
        if !query.is_empty() {
            out.push('?');
            out.push_str(&query);
        }

        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.fragment);
        }

        f.write_str(&out)
    }
}

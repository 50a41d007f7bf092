//! Factories: defaults plus overrides.
//!
//! A [`Factory`] owns a defaults value and builds full values by overlaying
//! partial overrides onto a copy of it. This is the usual way to construct
//! test fixtures and configuration objects where only a few fields differ
//! from a known baseline.

use crate::overlay::Overlay;

/// Builds values of `T` from defaults and partial overrides.
///
/// # Examples
///
/// ```rust
/// use recursive_partial::{Factory, RecursivePartial};
///
/// #[derive(Clone, Debug, PartialEq, RecursivePartial)]
/// struct SodaWater {
///     co2: u32,
///     water: u32,
/// }
///
/// #[derive(Clone, Debug, PartialEq, RecursivePartial)]
/// struct CokeFormula {
///     #[partial(nested)]
///     soda_water: SodaWater,
///     sugar: u32,
/// }
///
/// let factory = Factory::new(CokeFormula {
///     soda_water: SodaWater { co2: 10, water: 40 },
///     sugar: 50,
/// });
///
/// assert_eq!(factory.build_default(), *factory.defaults());
///
/// let formula = factory.build(PartialCokeFormula {
///     soda_water: Some(PartialSodaWater {
///         water: Some(35),
///         ..Default::default()
///     }),
///     ..Default::default()
/// });
/// assert_eq!(formula.soda_water, SodaWater { co2: 10, water: 35 });
/// assert_eq!(formula.sugar, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Factory<T> {
    defaults: T,
}

impl<T> Factory<T> {
    /// Creates a factory around `defaults`.
    #[must_use]
    pub const fn new(defaults: T) -> Self {
        Self { defaults }
    }

    /// Returns the defaults every build starts from.
    #[must_use]
    pub const fn defaults(&self) -> &T {
        &self.defaults
    }

    /// Consumes the factory and returns its defaults.
    #[must_use]
    pub fn into_defaults(self) -> T {
        self.defaults
    }
}

impl<T: Default> Factory<T> {
    /// Creates a factory around `T::default()`.
    #[must_use]
    pub fn from_default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Overlay + Clone> Factory<T> {
    /// Builds a value from the defaults with `overrides` applied.
    #[must_use]
    pub fn build(&self, overrides: T::Partial) -> T {
        self.defaults.clone().overlaid(overrides)
    }

    /// Builds a value equal to the defaults.
    #[must_use]
    pub fn build_default(&self) -> T {
        self.defaults.clone()
    }

    /// Builds one value per entry of `overrides`.
    pub fn build_many<I>(&self, overrides: I) -> Vec<T>
    where
        I: IntoIterator<Item = T::Partial>,
    {
        overrides
            .into_iter()
            .map(|partial| self.build(partial))
            .collect()
    }
}

impl<T: Overlay> Factory<T> {
    /// Returns a factory whose defaults have `overrides` applied.
    ///
    /// ```rust
    /// use recursive_partial::{Factory, RecursivePartial};
    ///
    /// #[derive(Clone, Debug, Default, PartialEq, RecursivePartial)]
    /// struct Retry {
    ///     attempts: u8,
    ///     backoff_ms: u64,
    /// }
    ///
    /// let aggressive = Factory::<Retry>::from_default().layer(PartialRetry {
    ///     attempts: Some(10),
    ///     ..Default::default()
    /// });
    ///
    /// assert_eq!(aggressive.build_default(), Retry { attempts: 10, backoff_ms: 0 });
    /// ```
    #[must_use]
    pub fn layer(self, overrides: T::Partial) -> Self {
        Self::new(self.defaults.overlaid(overrides))
    }
}

/// Builds `T::default()` with `overrides` applied.
///
/// ```rust
/// use recursive_partial::{RecursivePartial, with_overrides};
///
/// #[derive(Debug, Default, PartialEq, RecursivePartial)]
/// struct Window {
///     width: u32,
///     height: u32,
/// }
///
/// let window: Window = with_overrides(PartialWindow {
///     width: Some(800),
///     ..Default::default()
/// });
/// assert_eq!(window, Window { width: 800, height: 0 });
/// ```
#[must_use]
pub fn with_overrides<T: Default + Overlay>(overrides: T::Partial) -> T {
    T::default().overlaid(overrides)
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[derive(Clone, Debug, Default, PartialEq, crate::RecursivePartial)]
    struct Credentials {
        user: String,
        token: Option<String>,
    }

    #[derive(Clone, Debug, Default, PartialEq, crate::RecursivePartial)]
    struct Client {
        endpoint: String,
        #[partial(nested)]
        credentials: Credentials,
        timeout_ms: u64,
    }

    #[fixture]
    fn factory() -> Factory<Client> {
        Factory::new(Client {
            endpoint: "https://example.invalid".to_string(),
            credentials: Credentials {
                user: "anonymous".to_string(),
                token: None,
            },
            timeout_ms: 1_000,
        })
    }

    #[rstest]
    fn build_without_overrides_equals_defaults(factory: Factory<Client>) {
        assert_eq!(factory.build(PartialClient::default()), *factory.defaults());
    }

    #[rstest]
    fn build_does_not_change_defaults(factory: Factory<Client>) {
        let before = factory.defaults().clone();
        let _ = factory.build(PartialClient {
            timeout_ms: Some(5),
            ..PartialClient::default()
        });

        assert_eq!(*factory.defaults(), before);
    }

    #[rstest]
    fn build_applies_nested_overrides(factory: Factory<Client>) {
        let client = factory.build(PartialClient {
            credentials: Some(PartialCredentials {
                token: Some(Some("secret".to_string())),
                ..PartialCredentials::default()
            }),
            ..PartialClient::default()
        });

        assert_eq!(client.credentials.user, "anonymous");
        assert_eq!(client.credentials.token.as_deref(), Some("secret"));
    }

    #[rstest]
    fn build_many_builds_each_override(factory: Factory<Client>) {
        let clients = factory.build_many((1..=3).map(|timeout| PartialClient {
            timeout_ms: Some(timeout),
            ..PartialClient::default()
        }));

        let timeouts: Vec<u64> = clients.iter().map(|client| client.timeout_ms).collect();
        assert_eq!(timeouts, vec![1, 2, 3]);
    }

    #[rstest]
    fn layer_changes_defaults_for_later_builds(factory: Factory<Client>) {
        let layered = factory.layer(PartialClient {
            endpoint: Some("https://staging.invalid".to_string()),
            ..PartialClient::default()
        });

        let client = layered.build(PartialClient {
            timeout_ms: Some(10),
            ..PartialClient::default()
        });
        assert_eq!(client.endpoint, "https://staging.invalid");
        assert_eq!(client.timeout_ms, 10);
    }

    #[rstest]
    fn from_default_uses_default_value() {
        let factory = Factory::<Client>::from_default();

        assert_eq!(factory.into_defaults(), Client::default());
    }

    #[rstest]
    fn with_overrides_starts_from_default() {
        let client: Client = with_overrides(PartialClient {
            timeout_ms: Some(42),
            ..PartialClient::default()
        });

        assert_eq!(
            client,
            Client {
                timeout_ms: 42,
                ..Client::default()
            }
        );
    }
}

//! State of the conversion form and the transitions driven by the widget.

use api::conversion::ConversionError;
use api::conversion::ConversionRequest;
use api::conversion::ConversionResponse;
use api::fiat_currency::FiatCurrency;
use api::number_format::format_fixed;
use api::number_format::NumberLocale;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use std::str::FromStr;

/// Fraction digits shown for an amount in `symbol`.
fn result_decimals(symbol: &str) -> usize {
    FiatCurrency::from_str(symbol)
        .unwrap_or_default()
        .decimals() as usize
}

/// Where the form is in a conversion cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum ConversionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Identifies one issued conversion request.
///
/// Tickets increase monotonically; only the newest one may update the form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RequestTicket(u64);

/// Everything the converter widget renders from.
#[derive(Clone, PartialEq, Debug)]
pub struct ConversionFormState {
    /// Set once the widget is mounted; the container stays hidden until then.
    pub ready: bool,
    /// Source amount, kept as typed.
    pub amount: String,
    pub symbol: String,
    pub symbols: Vec<String>,
    pub show_results: bool,
    pub show_error: bool,
    pub amount_result: String,
    pub symbol_result: String,
    phase: ConversionPhase,
    last_ticket: u64,
}

impl Default for ConversionFormState {
    fn default() -> Self {
        Self {
            ready: false,
            amount: "100".to_string(),
            symbol: FiatCurrency::EUR.code().to_string(),
            symbols: FiatCurrency::codes(),
            show_results: false,
            show_error: false,
            amount_result: "1".to_string(),
            symbol_result: FiatCurrency::USD.code().to_string(),
            phase: ConversionPhase::default(),
            last_ticket: 0,
        }
    }
}

impl ConversionFormState {
    pub fn phase(&self) -> ConversionPhase {
        self.phase
    }

    pub fn mount(&mut self) {
        self.ready = true;
    }

    /// The request the current inputs describe.
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            amount: self.amount.clone(),
            symbol: self.symbol.clone(),
        }
    }

    /// Starts a new conversion and supersedes any request still in flight.
    pub fn begin_convert(&mut self) -> (RequestTicket, ConversionRequest) {
        self.last_ticket += 1;
        self.phase = ConversionPhase::Pending;
        (RequestTicket(self.last_ticket), self.request())
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.last_ticket
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false`, leaving the form untouched, when a newer request
    /// has been issued since. On failure the previous results are kept.
    /// `show_results` is raised after either outcome.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<ConversionResponse, ConversionError>,
        locale: &NumberLocale,
    ) -> bool {
        if !self.is_latest(ticket) {
            debug!(
                "dropping conversion #{}, superseded by #{}",
                ticket.0, self.last_ticket
            );
            return false;
        }

        match result {
            Ok(conversion) => {
                let decimals = result_decimals(&conversion.output.symbol);
                self.amount_result = format_fixed(conversion.output.amount, decimals, locale);
                self.symbol_result = conversion.output.symbol;
                self.phase = ConversionPhase::Succeeded;
            }
            Err(e) => {
                error!("Server error: {} (transient: {})", e, e.is_transient());
                self.show_error = true;
                self.phase = ConversionPhase::Failed;
            }
        }
        self.show_results = true;
        true
    }

    /// Hides the results panel. The error panel is left as it is.
    pub fn input_updated(&mut self) {
        self.show_results = false;
        if !self.phase.is_pending() {
            self.phase = ConversionPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::config::ApiConfig;
    use api::conversion::ConversionClient;
    use api::conversion::CurrencyAmount;
    use api::conversion::HttpConversionClient;
    use futures::executor::block_on;
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;

    /// Collects formatted log output so it can be asserted on.
    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl SharedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    enum FakeClient {
        Converts(f64, &'static str),
        Fails(u16),
        Malformed,
    }

    impl ConversionClient for FakeClient {
        async fn convert(
            &self,
            _request: &ConversionRequest,
        ) -> Result<ConversionResponse, ConversionError> {
            match self {
                Self::Converts(amount, symbol) => Ok(ConversionResponse {
                    input: None,
                    output: CurrencyAmount {
                        amount: *amount,
                        symbol: symbol.to_string(),
                    },
                    exchange_rate: None,
                }),
                Self::Fails(status) => Err(ConversionError::Status {
                    status: *status,
                    body: String::new(),
                }),
                Self::Malformed => Err(serde_json::from_str::<ConversionResponse>(
                    r#"{"output":{"amount":"lots"}}"#,
                )
                .unwrap_err()
                .into()),
            }
        }
    }

    fn convert(state: &mut ConversionFormState, client: &FakeClient) -> bool {
        let (ticket, request) = state.begin_convert();
        let result = block_on(client.convert(&request));
        state.complete(ticket, result, &NumberLocale::ENGLISH)
    }

    #[test]
    fn starts_with_defaults() {
        let state = ConversionFormState::default();
        assert!(!state.ready);
        assert_eq!(state.amount, "100");
        assert_eq!(state.symbol, "EUR");
        assert_eq!(state.symbols, vec!["EUR", "USD"]);
        assert!(!state.show_results);
        assert!(!state.show_error);
        assert_eq!(state.amount_result, "1");
        assert_eq!(state.symbol_result, "USD");
        assert!(state.phase().is_idle());
    }

    #[test]
    fn mount_sets_ready() {
        let mut state = ConversionFormState::default();
        state.mount();
        assert!(state.ready);
    }

    #[test]
    fn successful_conversion_shows_formatted_result() {
        let mut state = ConversionFormState::default();

        assert!(convert(&mut state, &FakeClient::Converts(108.5, "USD")));

        assert_eq!(state.amount_result, "108.50");
        assert_eq!(state.symbol_result, "USD");
        assert!(state.show_results);
        assert!(!state.show_error);
        assert!(state.phase().is_succeeded());
    }

    #[test]
    fn repeating_a_conversion_gives_the_same_state() {
        let mut state = ConversionFormState::default();
        let client = FakeClient::Converts(1234.5678, "USD");

        convert(&mut state, &client);
        let first = (state.amount_result.clone(), state.symbol_result.clone());
        convert(&mut state, &client);

        assert_eq!(first, (state.amount_result.clone(), state.symbol_result.clone()));
        assert_eq!(state.amount_result, "1,234.57");
        assert!(state.show_results);
    }

    #[test]
    fn failure_sets_flags_and_keeps_previous_results() {
        let mut state = ConversionFormState::default();
        state.amount = "0".to_string();
        state.input_updated();
        state.symbol = "USD".to_string();
        state.input_updated();

        assert!(convert(&mut state, &FakeClient::Fails(503)));

        assert!(state.show_error);
        assert!(state.show_results);
        assert_eq!(state.amount_result, "1");
        assert_eq!(state.symbol_result, "USD");
        assert!(state.phase().is_failed());
    }

    #[test]
    fn malformed_body_takes_the_error_path() {
        let mut state = ConversionFormState::default();
        convert(&mut state, &FakeClient::Converts(108.5, "USD"));

        convert(&mut state, &FakeClient::Malformed);

        assert!(state.show_error);
        assert!(state.show_results);
        assert_eq!(state.amount_result, "108.50");
        assert_eq!(state.symbol_result, "USD");
    }

    #[test]
    fn success_leaves_error_flag_untouched() {
        let mut state = ConversionFormState::default();
        convert(&mut state, &FakeClient::Fails(500));

        convert(&mut state, &FakeClient::Converts(0.9, "EUR"));

        assert!(state.show_error);
        assert_eq!(state.amount_result, "0.90");
        assert_eq!(state.symbol_result, "EUR");
    }

    #[test]
    fn editing_input_hides_results_only() {
        let mut state = ConversionFormState::default();
        convert(&mut state, &FakeClient::Converts(108.5, "USD"));

        state.amount = "250".to_string();
        state.input_updated();

        assert!(!state.show_results);
        assert!(!state.show_error);
        assert_eq!(state.amount_result, "108.50");
        assert_eq!(state.symbol_result, "USD");
        assert!(state.phase().is_idle());

        convert(&mut state, &FakeClient::Fails(500));
        state.input_updated();
        assert!(!state.show_results);
        assert!(state.show_error);
    }

    #[test]
    fn request_uses_inputs_as_typed() {
        let mut state = ConversionFormState::default();
        state.amount = "12abc".to_string();
        state.input_updated();
        state.symbol = "USD".to_string();
        state.input_updated();

        let (_, request) = state.begin_convert();

        assert_eq!(request.amount, "12abc");
        assert_eq!(request.symbol, "USD");
        assert!(state.phase().is_pending());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = ConversionFormState::default();
        let locale = NumberLocale::ENGLISH;
        let client_old = FakeClient::Converts(1.0, "EUR");
        let client_new = FakeClient::Converts(2.0, "USD");

        let (old, old_request) = state.begin_convert();
        let (new, new_request) = state.begin_convert();
        assert!(!state.is_latest(old));
        assert!(state.is_latest(new));

        let new_result = block_on(client_new.convert(&new_request));
        assert!(state.complete(new, new_result, &locale));

        let old_result = block_on(client_old.convert(&old_request));
        assert!(!state.complete(old, old_result, &locale));

        assert_eq!(state.amount_result, "2.00");
        assert_eq!(state.symbol_result, "USD");
    }

    #[test]
    fn stale_failure_does_not_raise_error() {
        let mut state = ConversionFormState::default();
        let locale = NumberLocale::ENGLISH;

        let (old, _) = state.begin_convert();
        let (new, _) = state.begin_convert();

        let stale = Err(ConversionError::Status {
            status: 500,
            body: String::new(),
        });
        assert!(!state.complete(old, stale, &locale));
        assert!(!state.show_error);
        assert!(!state.show_results);
        assert!(state.phase().is_pending());

        let fresh = block_on(FakeClient::Converts(3.0, "USD").convert(&state.request()));
        assert!(state.complete(new, fresh, &locale));
        assert!(state.show_results);
        assert_eq!(state.amount_result, "3.00");
    }

    #[test]
    fn edit_while_pending_keeps_pending() {
        let mut state = ConversionFormState::default();
        let (ticket, request) = state.begin_convert();

        state.amount = "5".to_string();
        state.input_updated();
        assert!(state.phase().is_pending());

        let result = block_on(FakeClient::Converts(5.4, "USD").convert(&request));
        assert!(state.complete(ticket, result, &NumberLocale::ENGLISH));
        assert!(state.show_results);
        assert_eq!(state.amount_result, "5.40");
    }

    #[test]
    fn result_follows_locale() {
        let mut state = ConversionFormState::default();
        let (ticket, request) = state.begin_convert();
        let result = block_on(FakeClient::Converts(1234.5, "USD").convert(&request));

        state.complete(ticket, result, &NumberLocale::from_language_tag("de-DE"));

        assert_eq!(state.amount_result, "1.234,50");
    }

    #[test]
    fn unknown_result_symbol_still_gets_two_decimals() {
        let mut state = ConversionFormState::default();

        convert(&mut state, &FakeClient::Converts(7.0, "GBP"));

        assert_eq!(state.amount_result, "7.00");
        assert_eq!(state.symbol_result, "GBP");
    }

    #[test]
    fn tie_amounts_round_up() {
        let mut state = ConversionFormState::default();

        convert(&mut state, &FakeClient::Converts(108.125, "USD"));

        assert_eq!(state.amount_result, "108.13");
    }

    #[tokio::test]
    async fn network_failure_is_logged_and_shown() {
        // nothing listens on this port once the listener is dropped
        let addr = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = HttpConversionClient::with_http_client(
            http,
            ApiConfig::new("", format!("http://{}", addr), ""),
            None,
        );

        let mut state = ConversionFormState::default();
        state.amount = "0".to_string();
        state.symbol = "USD".to_string();
        state.input_updated();

        let (ticket, request) = state.begin_convert();
        let result = client.convert(&request).await;
        assert!(matches!(&result, Err(e @ ConversionError::Request(_)) if e.is_transient()));

        let logs = SharedLog::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let applied = dioxus_logger::tracing::subscriber::with_default(subscriber, || {
            state.complete(ticket, result, &NumberLocale::ENGLISH)
        });

        assert!(applied);
        assert!(state.show_error);
        assert!(state.show_results);
        assert_eq!(state.amount_result, "1");
        assert_eq!(state.symbol_result, "USD");

        let logged = logs.contents();
        assert!(logged.contains("ERROR"), "log was: {logged}");
        assert!(
            logged.contains("Server error: request failed"),
            "log was: {logged}"
        );
        assert!(logged.contains("transient: true"), "log was: {logged}");
    }
}

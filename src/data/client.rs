use {
    crate::{
        config::Rub,
        data::{
            dto::{
                Ack, AuthPayload, Created, Credentials, DepositRequest, InvestmentList,
                Registration, TransactionList, UserEnvelope, WithdrawRequest,
            },
            reply::{ApiReply, decode_typed},
            session::Session,
            transport::{ApiRequest, Method, Service, Transport},
        },
        models::{NewInvestment, Transaction, User},
    },
    anyhow::{Context, Result},
    serde::{Serialize, de::DeserializeOwned},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Typed access to the auth and ledger services. Owns the session, so every request carries
/// the current token without any ambient state.
pub struct ApiClient<T: Transport> {
    transport: T,
    session: Session,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    async fn call<R: DeserializeOwned>(
        &self,
        service: Service,
        method: Method,
        path: &'static str,
        body: Option<&impl Serialize>,
    ) -> Result<ApiReply<R>> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .context("Failed to encode request body")?;

        let text = self
            .transport
            .send(ApiRequest {
                service,
                method,
                path,
                token: self.session.token().to_string(),
                body,
            })
            .await?;

        #[cfg(debug_assertions)]
        if DF.log_payloads {
            log::debug!("{} {} <- {}", method, path, text);
        }

        decode_typed(&text).with_context(|| format!("{} {}", method, path))
    }

    async fn get<R: DeserializeOwned>(&self, service: Service, path: &'static str) -> Result<ApiReply<R>> {
        self.call(service, Method::Get, path, None::<&()>).await
    }

    async fn post<R: DeserializeOwned>(
        &self,
        service: Service,
        path: &'static str,
        body: Option<&impl Serialize>,
    ) -> Result<ApiReply<R>> {
        self.call(service, Method::Post, path, body).await
    }

    fn start_session(&mut self, reply: ApiReply<AuthPayload>) -> ApiReply<User> {
        if let ApiReply::Ok(payload) = &reply {
            self.session = Session::new(payload.token.clone(), payload.user.clone());
            log::info!("Signed in as {}", payload.user.email);
        }
        reply.map(|payload| payload.user)
    }

    // --- Auth service ---

    pub async fn register(&mut self, form: &Registration) -> Result<ApiReply<User>> {
        let reply = self.post(Service::Auth, "/register", Some(form)).await?;
        Ok(self.start_session(reply))
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<ApiReply<User>> {
        let reply = self.post(Service::Auth, "/login", Some(credentials)).await?;
        Ok(self.start_session(reply))
    }

    /// The local session is dropped whatever the service answers.
    pub async fn logout(&mut self) -> Result<ApiReply<Ack>> {
        let reply = self.post(Service::Auth, "/logout", None::<&()>).await;
        self.session.clear();
        reply
    }

    pub async fn me(&self) -> Result<ApiReply<User>> {
        let reply: ApiReply<UserEnvelope> = self.get(Service::Auth, "/me").await?;
        Ok(reply.map(|envelope| envelope.user))
    }

    // --- Ledger service ---

    pub async fn investments(&self) -> Result<ApiReply<InvestmentList>> {
        self.get(Service::Ledger, "/list").await
    }

    pub async fn create_investment(&self, investment: &NewInvestment) -> Result<ApiReply<Created>> {
        self.post(Service::Ledger, "/create", Some(investment)).await
    }

    pub async fn deposit(&self, amount: Rub) -> Result<ApiReply<Ack>> {
        self.post(Service::Ledger, "/deposit", Some(&DepositRequest { amount }))
            .await
    }

    pub async fn withdraw(&self, amount: Rub, details: &str) -> Result<ApiReply<Ack>> {
        let request = WithdrawRequest {
            amount,
            details: details.to_string(),
        };
        self.post(Service::Ledger, "/withdraw", Some(&request)).await
    }

    pub async fn transactions(&self) -> Result<ApiReply<Vec<Transaction>>> {
        let reply: ApiReply<TransactionList> = self.get(Service::Ledger, "/transactions").await?;
        Ok(reply.map(|list| list.transactions))
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use async_trait::async_trait;
    use std::{
        collections::{HashMap, HashSet},
        sync::{Arc, Mutex},
    };

    /// In-process stand-in for both services: canned bodies per path, every request recorded.
    #[derive(Clone, Default)]
    pub(crate) struct FakeTransport {
        replies: Arc<Mutex<HashMap<&'static str, String>>>,
        unreachable: Arc<Mutex<HashSet<&'static str>>>,
        pub(crate) sent: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl FakeTransport {
        pub(crate) fn reply(self, path: &'static str, body: serde_json::Value) -> Self {
            self.replies.lock().unwrap().insert(path, body.to_string());
            self
        }

        pub(crate) fn reply_raw(self, path: &'static str, body: &str) -> Self {
            self.replies.lock().unwrap().insert(path, body.to_string());
            self
        }

        /// Requests to `path` fail at the transport level, as if the connection dropped.
        pub(crate) fn unreachable(self, path: &'static str) -> Self {
            self.unreachable.lock().unwrap().insert(path);
            self
        }

        pub(crate) fn paths(&self) -> Vec<&'static str> {
            self.sent.lock().unwrap().iter().map(|r| r.path).collect()
        }

        pub(crate) fn last(&self) -> Option<ApiRequest> {
            self.sent.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<String> {
            if self.unreachable.lock().unwrap().contains(request.path) {
                self.sent.lock().unwrap().push(request);
                anyhow::bail!("connection reset");
            }
            let body = self
                .replies
                .lock()
                .unwrap()
                .get(request.path)
                .cloned()
                .unwrap_or_else(|| r#"{"error": "Not found"}"#.to_string());
            self.sent.lock().unwrap().push(request);
            Ok(body)
        }
    }
}

/// Generates argument-less client methods for actions whose result is `()`.
macro_rules! impl_unit_action_methods {
    ($client_name:ident { $($method:ident => $variant:ident),* $(,)? }) => {
        impl $client_name {
            $(
                #[tracing::instrument(skip(self))]
                pub async fn $method(&self) -> Result<(), crate::cart_actor::CartError> {
                    tracing::debug!("Sending request");
                    match self.inner.dispatch(crate::cart_actor::CartAction::$variant).await {
                        Ok(crate::cart_actor::CartActionResult::$variant(())) => Ok(()),
                        Ok(_) => Err(crate::cart_actor::CartError::ActorCommunicationError(
                            "Unexpected result".to_string(),
                        )),
                        Err(e) => Err(crate::cart_actor::CartError::ActorCommunicationError(e)),
                    }
                }
            )*
        }
    };
}

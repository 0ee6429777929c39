//! Handler trait implemented by server function bodies

use courier_core::RequestEvent;
use std::future::Future;

/// An async function taking a [`RequestEvent`] followed by the domain
/// arguments `Args` (a tuple).
///
/// Implemented for every `Fn(RequestEvent, T1, .., Tn) -> Fut` with
/// `n <= 8`. Users normally never implement it by hand.
pub trait Handler<Args>: Send + Sync + 'static {
	/// Value produced by the handler's future
	type Output;

	type Future: Future<Output = Self::Output> + Send + 'static;

	fn call(&self, event: RequestEvent, args: Args) -> Self::Future;
}

macro_rules! impl_handler {
	($($ty:ident),*) => {
		#[allow(non_snake_case)]
		impl<F, Fut, $($ty,)*> Handler<($($ty,)*)> for F
		where
			F: Fn(RequestEvent, $($ty,)*) -> Fut + Send + Sync + 'static,
			Fut: Future + Send + 'static,
		{
			type Output = Fut::Output;
			type Future = Fut;

			fn call(&self, event: RequestEvent, ($($ty,)*): ($($ty,)*)) -> Self::Future {
				(self)(event, $($ty,)*)
			}
		}
	};
}

impl_handler!();
impl_handler!(T1);
impl_handler!(T1, T2);
impl_handler!(T1, T2, T3);
impl_handler!(T1, T2, T3, T4);
impl_handler!(T1, T2, T3, T4, T5);
impl_handler!(T1, T2, T3, T4, T5, T6);
impl_handler!(T1, T2, T3, T4, T5, T6, T7);
impl_handler!(T1, T2, T3, T4, T5, T6, T7, T8);

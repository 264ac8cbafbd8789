/// Declares a group of typed operation wrappers over a [`Client`](crate::Client).
///
/// Each line names a method, its required arguments (bound in order to the required
/// parameters of the descriptor), an optional body argument with the
/// [`OperationCall`](crate::OperationCall) setter used to attach it, the result type and
/// the descriptor. The generated methods return the call builder, so optional
/// parameters and cancellation are chained before `.await`.
///
/// The number of required arguments is checked against the descriptor at compile time.
///
/// ```rust
/// use contentmod_core::{
///     HttpVerb, OperationDescriptor, ParameterSpec, ResponseSpec, ValueKind, typed_operations,
/// };
///
/// const DELETE_TERM: OperationDescriptor = OperationDescriptor {
///     id: "ListManagementTerm_DeleteTerm",
///     method: HttpVerb::Delete,
///     path: "contentmoderator/lists/v1.0/termlists/{listId}/terms/{term}",
///     parameters: &[
///         ParameterSpec::path("listId"),
///         ParameterSpec::path("term"),
///         ParameterSpec::query("language", ValueKind::String).required(),
///     ],
///     responses: &[ResponseSpec::empty(204)],
///     ..OperationDescriptor::DEFAULT
/// };
///
/// typed_operations! {
///     /// Terms of a term list.
///     pub struct Terms {
///         /// Deletes a term from a list.
///         fn delete_term(list_id, term, language) -> () = DELETE_TERM;
///     }
/// }
/// ```
#[macro_export]
macro_rules! typed_operations {
    (
        $(#[$group_meta:meta])*
        $vis:vis struct $group:ident {
            $(
                $(#[$meta:meta])*
                fn $name:ident ( $($param:ident),* $(,)? )
                    $( with $setter:ident ( $body:ident : $body_ty:ty ) )?
                    -> $result:ty = $op:path;
            )*
        }
    ) => {
        $(#[$group_meta])*
        $vis struct $group<'a, T = $crate::ReqwestTransport> {
            client: &'a $crate::Client<T>,
        }

        impl<T> ::core::clone::Clone for $group<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> ::core::marker::Copy for $group<'_, T> {}

        impl<T> ::core::fmt::Debug for $group<'_, T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(::core::stringify!($group)).finish_non_exhaustive()
            }
        }

        impl<'a, T> $group<'a, T>
        where
            T: $crate::Transport,
        {
            /// Creates the operation group over a client.
            pub fn new(client: &'a $crate::Client<T>) -> Self {
                Self { client }
            }

            $(
                $(#[$meta])*
                pub fn $name(
                    &self,
                    $( $param: impl ::core::convert::Into<$crate::ParamValue>, )*
                    $( $body: $body_ty, )?
                ) -> $crate::OperationCall<'a, T, $result> {
                    const {
                        ::core::assert!(
                            $op.required_parameter_count()
                                == <[&str]>::len(&[$(::core::stringify!($param)),*]),
                            ::core::concat!(
                                "required arguments of `",
                                ::core::stringify!($name),
                                "` do not match its operation descriptor"
                            ),
                        );
                    }

                    self.client
                        .call(&$op)
                        .positional([$( ::core::convert::Into::<$crate::ParamValue>::into($param) ),*])
                        $( .$setter($body) )?
                }
            )*
        }
    };
}

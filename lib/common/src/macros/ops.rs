/// Implement [Index](std::ops::Index) and [IndexMut](std::ops::IndexMut) for `$Target`, indexed by
/// `$Idx` and producing `$Output`.
///
/// `$index` and `$index_mut` are evaluated with `$self` bound to the receiver and `$i` bound to
/// the index.
#[macro_export]
macro_rules! impl_index {
    ($self:ident: $Target:ident -> $Output:ty, $i:ident: $Idx:ty;
     $index:expr;
     $index_mut:expr) => {
        impl ::std::ops::Index<$Idx> for $Target {
            type Output = $Output;
            #[inline]
            fn index(&$self, $i: $Idx) -> &Self::Output {
                $index
            }
        }
        impl ::std::ops::IndexMut<$Idx> for $Target {
            #[inline]
            fn index_mut(&mut $self, $i: $Idx) -> &mut Self::Output {
                $index_mut
            }
        }
    };
}

/// Like [impl_index], but only implements [Index](std::ops::Index). For types whose elements must
/// not be handed out mutably.
#[macro_export]
macro_rules! impl_index_ref {
    ($self:ident: $Target:ident -> $Output:ty, $i:ident: $Idx:ty; $index:expr) => {
        impl ::std::ops::Index<$Idx> for $Target {
            type Output = $Output;
            #[inline]
            fn index(&$self, $i: $Idx) -> &Self::Output {
                $index
            }
        }
    };
}

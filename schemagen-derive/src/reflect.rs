use darling::{
    ast::{Data, Style},
    FromDeriveInput, FromField, FromMeta, FromVariant,
};
use proc_macro2::TokenStream;
use syn::{
    ext::IdentExt, meta::ParseNestedMeta, parse_quote, Attribute, DeriveInput, Expr, ExprLit, ExprPath,
    Generics, Ident, Lit, LitStr, Path, Token, Type,
};

#[derive(FromDeriveInput)]
#[darling(
    attributes(reflect),
    supports(struct_named, enum_unit),
    forward_attrs(doc, serde)
)]
struct ReflectInput {
    ident: Ident,
    generics: Generics,
    attrs: Vec<Attribute>,
    data: Data<ReflectVariant, ReflectField>,
    #[darling(default)]
    package: Option<Package>,
    #[darling(default)]
    crates: Crates,
}

/// `package = "path"` or `package = SOME_CONST`
#[derive(Debug)]
struct Package(Expr);

impl FromMeta for Package {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(ExprLit { lit: Lit::Str(_), .. }) => Ok(Self(expr.clone())),
            Expr::Path(ExprPath { qself: None, .. }) => Ok(Self(expr.clone())),
            _ => Err(darling::Error::custom("expected a string literal or a constant").with_span(expr)),
        }
    }
}

#[derive(FromField)]
#[darling(attributes(reflect), forward_attrs(doc, serde))]
struct ReflectField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
    #[darling(default)]
    required: bool,
}

#[derive(FromVariant)]
#[darling(attributes(reflect), forward_attrs(doc, serde))]
struct ReflectVariant {
    ident: Ident,
    attrs: Vec<Attribute>,
}

#[derive(Debug, FromMeta)]
struct Crates {
    #[darling(default = "Self::default_schemagen_core")]
    schemagen_core: Path,
}

// Default is required when the subattribute isn't mentioned at all
// Delegate to darling rather than deriving, so that we can piggyback off the `#[darling(default)]` clauses
impl Default for Crates {
    fn default() -> Self {
        Self::from_list(&[]).unwrap()
    }
}

impl Crates {
    fn default_schemagen_core() -> Path {
        parse_quote! { ::schemagen::core } // by default must work well with people using facade crate
    }
}

/// Container level `#[serde(...)]` options that change the serialized shape
#[derive(Debug, Default, PartialEq)]
struct SerdeContainer {
    rename_all: RenameRule,
    default: bool,
}

/// serde's `rename_all` rules
///
/// Fields are written in snake_case and variants in PascalCase, so each rule converts from
/// the respective source case the same way serde does. Acronyms are not split into words.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum RenameRule {
    #[default]
    None,
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    ScreamingKebabCase,
}

impl RenameRule {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "lowercase" => Self::LowerCase,
            "UPPERCASE" => Self::UpperCase,
            "PascalCase" => Self::PascalCase,
            "camelCase" => Self::CamelCase,
            "snake_case" => Self::SnakeCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            "kebab-case" => Self::KebabCase,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebabCase,
            _ => return None,
        })
    }

    fn apply_to_field(self, field: &str) -> String {
        match self {
            Self::None | Self::LowerCase | Self::SnakeCase => field.to_string(),
            Self::UpperCase | Self::ScreamingSnakeCase => field.to_ascii_uppercase(),
            Self::PascalCase => {
                let mut pascal = String::new();
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            }
            Self::CamelCase => lower_first(&Self::PascalCase.apply_to_field(field)),
            Self::KebabCase => field.replace('_', "-"),
            Self::ScreamingKebabCase => field.to_ascii_uppercase().replace('_', "-"),
        }
    }

    fn apply_to_variant(self, variant: &str) -> String {
        match self {
            Self::None | Self::PascalCase => variant.to_string(),
            Self::LowerCase => variant.to_ascii_lowercase(),
            Self::UpperCase => variant.to_ascii_uppercase(),
            Self::CamelCase => lower_first(variant),
            Self::SnakeCase => {
                let mut snake = String::new();
                for (i, ch) in variant.char_indices() {
                    if i > 0 && ch.is_uppercase() {
                        snake.push('_');
                    }
                    snake.push(ch.to_ascii_lowercase());
                }
                snake
            }
            Self::ScreamingSnakeCase => Self::SnakeCase.apply_to_variant(variant).to_ascii_uppercase(),
            Self::KebabCase => Self::SnakeCase.apply_to_variant(variant).replace('_', "-"),
            Self::ScreamingKebabCase => Self::ScreamingSnakeCase.apply_to_variant(variant).replace('_', "-"),
        }
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Field and variant level `#[serde(...)]` options that change the serialized shape
#[derive(Debug, Default, PartialEq)]
struct SerdeMember {
    rename: Option<String>,
    skip: bool,
    flatten: bool,
    skip_serializing_if: bool,
    default: bool,
}

pub(crate) fn derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = match syn::parse2(input) {
        Err(err) => return err.to_compile_error(),
        Ok(di) => di,
    };
    let input = match ReflectInput::from_derive_input(&ast) {
        Err(err) => return err.write_errors(),
        Ok(input) => input,
    };
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: ReflectInput) -> syn::Result<TokenStream> {
    let ReflectInput {
        ident,
        generics,
        attrs,
        data,
        package,
        crates: Crates { schemagen_core },
    } = input;

    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &generics,
            "#[derive(Reflect)] does not support generic types",
        ));
    }

    let name = ident.unraw().to_string();
    let package = match package {
        Some(Package(package)) => quote! { #package },
        None => quote! { ::core::module_path!() },
    };
    let container = serde_container(&attrs)?;
    let describe = describe(&attrs);

    let type_info = match data {
        Data::Struct(fields) => {
            if fields.style != Style::Struct {
                return Err(syn::Error::new_spanned(
                    &ident,
                    "#[derive(Reflect)] only supports structs with named fields",
                ));
            }
            let mut entries = Vec::with_capacity(fields.fields.len());
            for field in fields.fields {
                if let Some(entry) = field_entry(&schemagen_core, &container, field)? {
                    entries.push(entry);
                }
            }
            quote! {
                #schemagen_core::reflect::TypeInfo::structure::<Self>(#name, #package, ::std::vec![
                    #(#entries),*
                ])
            }
        }
        Data::Enum(variants) => {
            let mut values = Vec::with_capacity(variants.len());
            for variant in variants {
                let serde = serde_member(&variant.attrs)?;
                if serde.skip {
                    continue;
                }
                let value = serde.rename.unwrap_or_else(|| {
                    container
                        .rename_all
                        .apply_to_variant(&variant.ident.unraw().to_string())
                });
                values.push(value);
            }
            quote! {
                #schemagen_core::reflect::TypeInfo::enumeration::<Self>(#name, #package, ::std::vec![
                    #(#values),*
                ])
            }
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #schemagen_core::Reflect for #ident {
            fn type_info() -> #schemagen_core::reflect::TypeInfo {
                #type_info #describe
            }
        }
    })
}

/// The `Field` constructor for one struct field, `None` for skipped fields
fn field_entry(
    krate: &Path,
    container: &SerdeContainer,
    field: ReflectField,
) -> syn::Result<Option<TokenStream>> {
    let serde = serde_member(&field.attrs)?;
    if serde.skip {
        return Ok(None);
    }
    let Some(ident) = field.ident else {
        return Ok(None);
    };
    let ty = &field.ty;

    let name = if serde.flatten {
        String::new()
    } else {
        serde
            .rename
            .unwrap_or_else(|| container.rename_all.apply_to_field(&ident.unraw().to_string()))
    };

    let mut modifiers = Vec::new();
    if serde.flatten {
        modifiers.push(quote! { .inline() });
    }
    if serde.skip_serializing_if {
        modifiers.push(quote! { .omit_empty() });
    }
    let defaulted = serde.default || container.default;
    if field.required || !(serde.flatten || serde.skip_serializing_if || defaulted) {
        modifiers.push(quote! { .required() });
    }
    if let Some(description) = doc_string(&field.attrs) {
        modifiers.push(quote! { .describe(#description) });
    }

    Ok(Some(quote! {
        #krate::reflect::Field::new::<#ty>(#name) #(#modifiers)*
    }))
}

/// Chain a `.describe(..)` call when the item carries doc comments
fn describe(attrs: &[Attribute]) -> TokenStream {
    match doc_string(attrs) {
        Some(description) => quote! { .describe(#description) },
        None => quote! {},
    }
}

/// Joined doc comment lines, trimmed of the leading space rustdoc adds
fn doc_string(attrs: &[Attribute]) -> Option<String> {
    let lines = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect::<Vec<_>>();
    let doc = lines.join("\n");
    let doc = doc.trim();
    (!doc.is_empty()).then(|| doc.to_string())
}

fn serde_container(attrs: &[Attribute]) -> syn::Result<SerdeContainer> {
    let mut container = SerdeContainer::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                if let Some(name) = serialize_name(&meta)? {
                    container.rename_all = RenameRule::from_name(&name)
                        .ok_or_else(|| meta.error(format!("unknown rename rule `{name}`")))?;
                }
            } else if meta.path.is_ident("default") {
                container.default = true;
                skip_value(&meta)?;
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })?;
    }
    Ok(container)
}

fn serde_member(attrs: &[Attribute]) -> syn::Result<SerdeMember> {
    let mut member = SerdeMember::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                member.rename = serialize_name(&meta)?;
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                member.skip = true;
            } else if meta.path.is_ident("flatten") {
                member.flatten = true;
            } else if meta.path.is_ident("skip_serializing_if") {
                member.skip_serializing_if = true;
                skip_value(&meta)?;
            } else if meta.path.is_ident("default") {
                member.default = true;
                skip_value(&meta)?;
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })?;
    }
    Ok(member)
}

/// Name from `key = "name"` or `key(serialize = "name", ..)`
fn serialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse::<LitStr>()?.value()));
    }
    let mut name = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            name = Some(inner.value()?.parse::<LitStr>()?.value());
        } else {
            skip_value(&inner)?;
        }
        Ok(())
    })?;
    Ok(name)
}

/// Consume the value of an option we don't interpret
fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Lit>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}

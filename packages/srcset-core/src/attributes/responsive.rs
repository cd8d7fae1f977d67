use crate::attributes::sizes::build_sizes_attribute;
use crate::attributes::srcset::build_srcset_attribute_with;
use crate::breakpoints::{compute_breakpoints, BreakpointSet};
use crate::errors::SrcsetError;
use crate::options::{SrcsetOptions, SrcsetSpec};
use crate::url::UrlBuilder;

/// img 要素に付与するレスポンシブ属性
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsiveAttributes {
    pub srcset: Option<String>,
    pub sizes: Option<String>,
}

fn breakpoints_for(options: &SrcsetOptions) -> Result<BreakpointSet, SrcsetError> {
    compute_breakpoints(&options.to_request()?)
}

/// 設定から srcset 属性の値を生成する
///
/// 文字列指定はそのまま返し、空の設定では `None` を返す。
/// `transformation` が指定されていれば各候補の URL に適用する。
pub fn srcset_attribute<B>(spec: &SrcsetSpec, builder: &B) -> Result<Option<String>, SrcsetError>
where
    B: UrlBuilder + ?Sized,
{
    if spec.is_empty() {
        return Ok(None);
    }

    match spec {
        SrcsetSpec::Prebuilt(srcset) => Ok(Some(srcset.clone())),
        SrcsetSpec::Options(options) => {
            let breakpoints = breakpoints_for(options)?;
            Ok(Some(build_srcset_attribute_with(
                &breakpoints,
                builder,
                options.transformation.as_ref(),
            )))
        }
    }
}

/// 設定から sizes 属性の値を生成する
///
/// 文字列指定や空の設定では `None` を返す。
pub fn sizes_attribute(spec: &SrcsetSpec) -> Result<Option<String>, SrcsetError> {
    match spec {
        SrcsetSpec::Options(options) if !options.is_empty() => {
            let breakpoints = breakpoints_for(options)?;
            Ok(Some(build_sizes_attribute(&breakpoints)))
        }
        _ => Ok(None),
    }
}

/// srcset と sizes をまとめて生成する
///
/// ブレークポイントは1回だけ計算する。sizes は `sizes: true` の場合のみ生成する。
pub fn responsive_attributes<B>(
    spec: &SrcsetSpec,
    builder: &B,
) -> Result<ResponsiveAttributes, SrcsetError>
where
    B: UrlBuilder + ?Sized,
{
    if spec.is_empty() {
        return Ok(ResponsiveAttributes::default());
    }

    let options = match spec {
        SrcsetSpec::Prebuilt(srcset) => {
            return Ok(ResponsiveAttributes {
                srcset: Some(srcset.clone()),
                sizes: None,
            });
        }
        SrcsetSpec::Options(options) => options,
    };

    let breakpoints = breakpoints_for(options)?;
    let sizes = options
        .sizes
        .then(|| build_sizes_attribute(&breakpoints));

    Ok(ResponsiveAttributes {
        srcset: Some(build_srcset_attribute_with(
            &breakpoints,
            builder,
            options.transformation.as_ref(),
        )),
        sizes,
    })
}

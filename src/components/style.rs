use crate::content::Accent;
use iced::{Background, Color, Shadow, Theme, Vector};

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::from_rgb8(0x3B, 0x82, 0xF6),
        Accent::Green => Color::from_rgb8(0x22, 0xC5, 0x5E),
        Accent::Purple => Color::from_rgb8(0xA8, 0x55, 0xF7),
        Accent::Yellow => Color::from_rgb8(0xEA, 0xB3, 0x08),
    }
}

pub fn card_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(8.0),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.15),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

pub fn frame_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

pub fn drop_zone_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color,
            width: 2.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

pub fn tinted_style(accent: Accent) -> impl Fn(&Theme) -> iced::widget::container::Style {
    move |_theme| iced::widget::container::Style {
        background: Some(Background::Color(accent_color(accent).scale_alpha(0.12))),
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

pub fn bullet_style(accent: Accent) -> impl Fn(&Theme) -> iced::widget::container::Style {
    move |_theme| iced::widget::container::Style {
        background: Some(Background::Color(accent_color(accent))),
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

pub fn accent_button_style(
    accent: Accent,
) -> impl Fn(&Theme, iced::widget::button::Status) -> iced::widget::button::Style {
    move |_theme, status| {
        let base = accent_color(accent);
        let background = match status {
            iced::widget::button::Status::Hovered => darken(base, 0.1),
            iced::widget::button::Status::Pressed => darken(base, 0.2),
            iced::widget::button::Status::Disabled => base.scale_alpha(0.5),
            iced::widget::button::Status::Active => base,
        };

        iced::widget::button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: iced::border::Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: iced::border::Radius::new(8.0),
            },
            shadow: Shadow::default(),
        }
    }
}

fn darken(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r - amount).max(0.0),
        g: (color.g - amount).max(0.0),
        b: (color.b - amount).max(0.0),
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_clamps_at_black() {
        let dark = darken(Color::from_rgb(0.05, 0.5, 1.0), 0.2);
        assert_eq!(dark.r, 0.0);
        assert!((dark.g - 0.3).abs() < 1e-6);
        assert_eq!(dark.a, 1.0);
    }

    #[test]
    fn accents_are_distinct() {
        let colors = [Accent::Blue, Accent::Green, Accent::Purple, Accent::Yellow].map(accent_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

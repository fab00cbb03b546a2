//! Behaviour diagrams: use cases, goal states, goal activity, data flow

use super::{canvas, column, TITLE};
use crate::palette::*;
use crate::scene::{Scene, TextStyle};

pub(super) fn usecase() -> Scene {
    let header = TextStyle::bold(16.0);
    let body = TextStyle::regular(13.0);
    let mut s = canvas(1000, 900, "Діаграма прецедентів (Use Case)", TITLE, 30.0);

    s.rounded_rect([250.0, 80.0, 850.0, 820.0], BG, BORDER, 3.0);
    s.centered((550.0, 100.0), "Habit Tracker System", header, TEXT);

    // stick figure
    s.ellipse([50.0, 250.0, 130.0, 330.0], None, PRIMARY, 2.0);
    let limbs = [
        [(90.0, 330.0), (90.0, 450.0)],
        [(90.0, 370.0), (50.0, 420.0)],
        [(90.0, 370.0), (130.0, 420.0)],
        [(90.0, 450.0), (50.0, 520.0)],
        [(90.0, 450.0), (130.0, 520.0)],
    ];
    for limb in limbs {
        s.line(&limb, PRIMARY, 3.0);
    }
    s.centered((90.0, 540.0), "Користувач", body, TEXT);

    let cases = [
        ("Реєстрація", 300.0, 150.0),
        ("Авторизація", 500.0, 150.0),
        ("Створення цілі", 300.0, 250.0),
        ("Редагування цілі", 500.0, 250.0),
        ("Видалення цілі", 700.0, 250.0),
        ("Логування\nпрогресу", 300.0, 350.0),
        ("Перегляд\nстатистики", 500.0, 350.0),
        ("Перегляд\nдосягнень", 700.0, 350.0),
        ("Створення групи", 300.0, 450.0),
        ("Приєднання\nдо групи", 500.0, 450.0),
        ("Перегляд стрічки", 500.0, 550.0),
        ("Редагування\nпрофілю", 700.0, 550.0),
    ];
    for (name, x, y) in cases {
        s.ellipse(
            [x - 80.0, y - 30.0, x + 80.0, y + 30.0],
            Some(SKY),
            PRIMARY,
            2.0,
        );
        s.centered((x, y), name, body, TEXT);
        s.line(&[(130.0, 400.0), (x - 80.0, y)], BORDER, 1.0);
    }

    s.centered(
        (500.0, 860.0),
        "UC діаграма системи відстеження звичок",
        body,
        BORDER,
    );
    s
}

pub(super) fn goal_states() -> Scene {
    let header = TextStyle::bold(16.0);
    let small = TextStyle::regular(11.0);
    let mut s = canvas(
        1100,
        800,
        "Діаграма станів - Життєвий цикл Goal",
        TITLE,
        30.0,
    );

    s.ellipse([530.0, 80.0, 550.0, 100.0], Some(BLACK), BLACK, 1.0);

    let states = [
        ("DRAFT", [220.0, 140.0, 440.0, 220.0], AMBER, ACCENT),
        ("ACTIVE", [220.0, 280.0, 440.0, 360.0], MINT, SECONDARY),
        ("PAUSED", [660.0, 280.0, 880.0, 360.0], AMBER, ACCENT),
        ("COMPLETED", [220.0, 440.0, 440.0, 520.0], SKY, PRIMARY),
        ("ABANDONED", [660.0, 440.0, 880.0, 520.0], ROSE, PINK),
    ];
    for (name, bounds, fill, outline) in states {
        s.rounded_rect_with_radius(bounds, 20.0, fill, outline, 3.0);
        let center = ((bounds[0] + bounds[2]) / 2.0, (bounds[1] + bounds[3]) / 2.0);
        s.centered(center, name, header, TEXT);
    }

    // final state
    s.ellipse([515.0, 600.0, 565.0, 650.0], Some(WHITE), BLACK, 3.0);
    s.ellipse([525.0, 610.0, 555.0, 640.0], Some(BLACK), BLACK, 1.0);

    // path, arrowhead, label position, label
    let transitions: [(&[(f32, f32)], [(f32, f32); 3], (f32, f32), &str); 9] = [
        (
            &[(540.0, 100.0), (360.0, 140.0)],
            [(360.0, 140.0), (365.0, 125.0), (355.0, 125.0)],
            (450.0, 115.0),
            "create()",
        ),
        (
            &[(330.0, 220.0), (330.0, 280.0)],
            [(330.0, 280.0), (325.0, 265.0), (335.0, 265.0)],
            (370.0, 250.0),
            "start()",
        ),
        (
            &[(440.0, 320.0), (660.0, 320.0)],
            [(660.0, 320.0), (645.0, 315.0), (645.0, 325.0)],
            (550.0, 305.0),
            "pause()",
        ),
        (
            &[(770.0, 360.0), (770.0, 400.0), (440.0, 340.0)],
            [(440.0, 340.0), (455.0, 340.0), (445.0, 350.0)],
            (600.0, 380.0),
            "resume()",
        ),
        (
            &[(330.0, 360.0), (330.0, 440.0)],
            [(330.0, 440.0), (325.0, 425.0), (335.0, 425.0)],
            (370.0, 400.0),
            "complete()",
        ),
        (
            &[(400.0, 360.0), (700.0, 440.0)],
            [(700.0, 440.0), (685.0, 435.0), (695.0, 430.0)],
            (550.0, 395.0),
            "abandon()",
        ),
        (
            &[(770.0, 360.0), (770.0, 440.0)],
            [(770.0, 440.0), (765.0, 425.0), (775.0, 425.0)],
            (810.0, 400.0),
            "abandon()",
        ),
        (
            &[(330.0, 520.0), (330.0, 580.0), (520.0, 625.0)],
            [(520.0, 625.0), (505.0, 620.0), (515.0, 615.0)],
            (400.0, 600.0),
            "archive()",
        ),
        (
            &[(770.0, 520.0), (770.0, 580.0), (560.0, 625.0)],
            [(560.0, 625.0), (575.0, 620.0), (565.0, 615.0)],
            (670.0, 600.0),
            "archive()",
        ),
    ];
    for (path, head, at, label) in transitions {
        s.line(path, BORDER, 2.0);
        s.polygon(&head, BORDER);
        s.text(at, label, small, TEXT);
    }

    s.rounded_rect([50.0, 680.0, 1050.0, 760.0], SNOW, BORDER, 2.0);
    s.centered((550.0, 700.0), "Можливі переходи між станами", header, TEXT);
    column(
        &mut s,
        (60.0, 720.0),
        20.0,
        &[
            "• create() - створення нової цілі у статусі DRAFT",
            "• start() - активація цілі, початок відстеження",
            "• pause() - призупинення відстеження (тимчасово)",
            "• resume() - відновлення активної цілі після паузи",
            "• complete() - успішне завершення цілі",
            "• abandon() - відмова від цілі (з будь-якого стану)",
            "• archive() - архівування завершеної або покинутої цілі",
        ],
        small,
        TEXT,
    );
    s
}

/// Downward connector ending in an arrowhead at `(450, to)`
fn step_down(s: &mut Scene, from: f32, to: f32) {
    s.line(&[(450.0, from), (450.0, to)], BORDER, 2.0);
    s.polygon(
        &[(450.0, to), (445.0, to - 15.0), (455.0, to - 15.0)],
        BORDER,
    );
}

pub(super) fn goal_activity() -> Scene {
    let header = TextStyle::bold(14.0);
    let body = TextStyle::regular(12.0);
    let small = TextStyle::regular(11.0);
    let mut s = canvas(
        900,
        1100,
        "Діаграма діяльності - Створення та відстеження цілі",
        TextStyle::bold(22.0),
        30.0,
    );

    s.ellipse([430.0, 70.0, 470.0, 110.0], Some(BLACK), BLACK, 1.0);

    let mut y = 130.0;
    let actions = [
        ("Користувач натискає\n'Створити ціль'", SKY, PRIMARY),
        ("Відкривається форма\nствор ення цілі", AMBER, ACCENT),
        (
            "Заповнення полів:\n• Назва\n• Опис\n• Частота",
            MINT,
            SECONDARY,
        ),
    ];
    for (action, fill, outline) in actions {
        s.rounded_rect_with_radius([250.0, y, 650.0, y + 70.0], 15.0, fill, outline, 2.0);
        s.centered((450.0, y + 35.0), action, body, TEXT);
        step_down(&mut s, y + 70.0, y + 90.0);
        y += 110.0;
    }

    // validation
    let decision = y;
    s.outlined_polygon(
        &[
            (450.0, decision),
            (550.0, decision + 50.0),
            (450.0, decision + 100.0),
            (350.0, decision + 50.0),
        ],
        AMBER,
        ACCENT,
        3.0,
    );
    s.centered((450.0, decision + 50.0), "Валідація\nуспішна?", body, TEXT);

    // rejected: back to the form
    s.line(
        &[
            (350.0, decision + 50.0),
            (200.0, decision + 50.0),
            (200.0, 280.0),
            (250.0, 280.0),
        ],
        BORDER,
        2.0,
    );
    s.polygon(&[(250.0, 280.0), (235.0, 275.0), (235.0, 285.0)], BORDER);
    s.centered((275.0, decision + 50.0), "Ні", body, RED);

    y = decision + 120.0;
    step_down(&mut s, decision + 100.0, y);
    s.text((480.0, decision + 110.0), "Так", body, SECONDARY);

    s.rounded_rect_with_radius([250.0, y, 650.0, y + 60.0], 15.0, MINT, SECONDARY, 2.0);
    s.centered(
        (450.0, y + 30.0),
        "Збереження цілі в БД\n(статус: ACTIVE)",
        body,
        TEXT,
    );

    y += 80.0;
    step_down(&mut s, y - 20.0, y);
    s.rounded_rect_with_radius([250.0, y, 650.0, y + 60.0], 15.0, SKY, PRIMARY, 2.0);
    s.centered(
        (450.0, y + 30.0),
        "Відображення повідомлення\nпро успіх",
        body,
        TEXT,
    );

    y += 80.0;
    step_down(&mut s, y - 20.0, y);

    // daily loop
    s.rounded_rect([150.0, y, 750.0, y + 180.0], ICE, BORDER, 3.0);
    s.centered(
        (450.0, y + 20.0),
        "Щоденне відстеження прогресу",
        header,
        TEXT,
    );
    let mut inner = y + 50.0;
    s.rounded_rect_with_radius(
        [250.0, inner, 650.0, inner + 50.0],
        15.0,
        AMBER,
        ACCENT,
        2.0,
    );
    s.centered(
        (450.0, inner + 25.0),
        "Користувач відмічає\nвиконання за день",
        body,
        TEXT,
    );
    inner += 70.0;
    step_down(&mut s, inner - 20.0, inner);
    s.rounded_rect_with_radius(
        [250.0, inner, 650.0, inner + 50.0],
        15.0,
        MINT,
        SECONDARY,
        2.0,
    );
    s.centered(
        (450.0, inner + 25.0),
        "Оновлення статистики\nта прогресу",
        body,
        TEXT,
    );

    s.line(
        &[
            (750.0, y + 90.0),
            (800.0, y + 90.0),
            (800.0, inner - 30.0),
            (250.0, inner - 30.0),
        ],
        BORDER,
        2.0,
    );
    s.polygon(
        &[
            (250.0, inner - 30.0),
            (265.0, inner - 35.0),
            (265.0, inner - 25.0),
        ],
        BORDER,
    );
    s.text((810.0, y + 120.0), "Повтор\nщодня", small, TEXT);

    // end node
    y += 200.0;
    s.line(&[(450.0, y - 20.0), (450.0, y + 20.0)], BORDER, 2.0);
    s.ellipse([430.0, y + 20.0, 470.0, y + 60.0], Some(WHITE), BLACK, 3.0);
    s.ellipse([440.0, y + 30.0, 460.0, y + 50.0], Some(BLACK), BLACK, 1.0);
    s
}

/// Open-ended data store: top, bottom and left edges
fn data_store(s: &mut Scene, y: f32, label: &str, style: TextStyle) {
    s.line(
        &[(750.0, y), (620.0, y), (620.0, y + 40.0), (750.0, y + 40.0)],
        BLACK,
        3.0,
    );
    s.centered((685.0, y + 20.0), label, style, TEXT);
}

pub(super) fn dataflow() -> Scene {
    let header = TextStyle::bold(15.0);
    let body = TextStyle::regular(12.0);
    let small = TextStyle::regular(10.0);
    let mut s = canvas(
        1100,
        900,
        "Діаграма потоку даних (DFD Level 1)",
        TITLE,
        30.0,
    );

    s.rounded_rect([50.0, 180.0, 200.0, 280.0], SKY, PRIMARY, 3.0);
    s.centered((125.0, 200.0), "Користувач", header, TEXT);
    s.text((60.0, 230.0), "• Реєстрація", small, TEXT);
    s.text((60.0, 250.0), "• Логін", small, TEXT);
    s.text((60.0, 265.0), "• Перегляд даних", small, TEXT);

    let processes = [
        (80.0, "1.0", "Автентифікація", AMBER, ACCENT),
        (220.0, "2.0", "Управління цілями", MINT, SECONDARY),
        (360.0, "3.0", "Відстеження\nпрогресу", ROSE, PINK),
        (500.0, "4.0", "Управління\nгрупами", SKY, PRIMARY),
    ];
    for (y, number, name, fill, outline) in processes {
        s.ellipse([280.0, y, 480.0, y + 100.0], Some(fill), outline, 3.0);
        s.centered((380.0, y + 40.0), number, header, TEXT);
        s.centered((380.0, y + 65.0), name, body, TEXT);
    }

    for (y, label) in [
        (120.0, "D1: Users"),
        (270.0, "D2: Goals"),
        (410.0, "D3: Progress"),
        (550.0, "D4: Groups"),
    ] {
        data_store(&mut s, y, label, header);
    }

    s.rounded_rect([850.0, 350.0, 1050.0, 450.0], AMBER, ACCENT, 3.0);
    s.centered((950.0, 375.0), "Система\nДосягнень", header, TEXT);
    s.text((860.0, 415.0), "• Нарахування", small, TEXT);
    s.text((860.0, 430.0), "• Бейджі", small, TEXT);

    let flows = [
        ((200.0, 200.0), (280.0, 140.0), "Credentials"),
        ((300.0, 180.0), (200.0, 240.0), "JWT Token"),
        ((480.0, 130.0), (620.0, 130.0), "User data"),
        ((640.0, 150.0), (480.0, 150.0), "User info"),
        ((200.0, 250.0), (280.0, 270.0), "Goal data"),
        ((300.0, 320.0), (200.0, 260.0), "Goal list"),
        ((480.0, 270.0), (620.0, 280.0), "Save goal"),
        ((640.0, 300.0), (480.0, 290.0), "Goal data"),
        ((200.0, 320.0), (280.0, 400.0), "Progress log"),
        ((300.0, 460.0), (200.0, 330.0), "Statistics"),
        ((480.0, 420.0), (620.0, 420.0), "Save progress"),
        ((640.0, 440.0), (480.0, 430.0), "Progress data"),
        ((480.0, 410.0), (850.0, 390.0), "Trigger check"),
        ((900.0, 450.0), (480.0, 440.0), "Badge earned"),
        ((200.0, 400.0), (280.0, 540.0), "Group action"),
        ((300.0, 600.0), (200.0, 410.0), "Group data"),
        ((480.0, 560.0), (620.0, 560.0), "Save group"),
        ((640.0, 580.0), (480.0, 570.0), "Group info"),
    ];
    for (from, to, label) in flows {
        s.arrow(from, to, BORDER, 2.0, 10.0);
        let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0 - 10.0);
        s.centered(mid, label, small, TEXT);
    }

    s.rounded_rect([50.0, 700.0, 1050.0, 850.0], SNOW, BORDER, 2.0);
    s.centered((550.0, 720.0), "Легенда", header, TEXT);
    let legend = [
        ("Прямокутник", "Зовнішня сутність (користувач, система)"),
        ("Коло/Еліпс", "Процес обробки даних"),
        ("Паралельні лінії", "Сховище даних (база даних)"),
        ("Стрілка", "Потік даних між компонентами"),
    ];
    for (i, (shape, meaning)) in legend.iter().enumerate() {
        let y = 750.0 + 25.0 * i as f32;
        s.text((70.0, y), &format!("• {shape}:"), body, TEXT);
        s.text((220.0, y), meaning, small, TEXT);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    #[test]
    fn test_usecase_has_twelve_cases() {
        let scene = usecase();
        let ovals = scene
            .shapes()
            .iter()
            .filter(|shape| matches!(shape, Shape::Ellipse { fill: Some(_), .. }))
            .count();
        assert_eq!(ovals, 12);
    }

    #[test]
    fn test_states_use_wide_radius() {
        let scene = goal_states();
        let rounded = scene
            .shapes()
            .iter()
            .filter(|shape| matches!(shape, Shape::Rect { radius, .. } if *radius == 20.0))
            .count();
        assert_eq!(rounded, 5);
    }

    #[test]
    fn test_activity_ends_inside_canvas() {
        let scene = goal_activity();
        let Some(Shape::Ellipse { bounds, .. }) = scene.shapes().last() else {
            panic!("activity must end with the final node");
        };
        assert_eq!(*bounds, [440.0, 970.0, 460.0, 990.0]);
    }

    #[test]
    fn test_dataflow_has_eighteen_flows() {
        let scene = dataflow();
        let heads = scene
            .shapes()
            .iter()
            .filter(|shape| matches!(shape, Shape::Polygon { .. }))
            .count();
        assert_eq!(heads, 18);
    }
}

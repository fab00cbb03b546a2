//! Sequence diagrams: authentication, progress logging, groups

use super::{canvas, column, TITLE};
use crate::palette::*;
use crate::scene::{Scene, TextStyle};

/// Lane header box and dashed lifeline geometry
struct Lanes {
    top: f32,
    half_width: f32,
    bottom: f32,
}

impl Lanes {
    fn draw(&self, s: &mut Scene, lanes: &[(&str, f32)], style: TextStyle) {
        for (name, x) in lanes {
            s.rounded_rect(
                [x - self.half_width, self.top, x + self.half_width, self.top + 40.0],
                PRIMARY,
                PRIMARY,
                2.0,
            );
            s.centered((*x, self.top + 20.0), name, style, WHITE);
            s.lifeline(*x, self.top + 40.0, self.bottom, BORDER);
        }
    }
}

/// Horizontal message arrow
struct Message<'a> {
    from: f32,
    to: f32,
    y: f32,
    text: &'a str,
    /// `None` draws a thin line without a head
    color: Option<&'a str>,
}

const fn msg<'a>(from: f32, to: f32, text: &'a str, y: f32, color: Option<&'a str>) -> Message<'a> {
    Message {
        from,
        to,
        y,
        text,
        color,
    }
}

/// Head length and half height, label lift, label style
struct Arrows {
    head: (f32, f32),
    lift: f32,
    style: TextStyle,
}

impl Arrows {
    fn draw(&self, s: &mut Scene, messages: &[Message<'_>]) {
        let (len, half) = self.head;
        for m in messages {
            let y = m.y;
            match m.color {
                Some(color) => {
                    s.line(&[(m.from, y), (m.to, y)], color, 2.0);
                    let back = if m.from < m.to { m.to - len } else { m.to + len };
                    s.polygon(&[(m.to, y), (back, y - half), (back, y + half)], color);
                }
                None => s.line(&[(m.from, y), (m.to, y)], BORDER, 1.0),
            }
            s.centered(
                ((m.from + m.to) / 2.0, y - self.lift),
                m.text,
                self.style,
                TEXT,
            );
        }
    }
}

/// Execution bars on lifelines
fn activations(s: &mut Scene, bars: &[(f32, f32, f32)], half: f32, width: f32) {
    for &(x, y1, y2) in bars {
        s.rect([x - half, y1, x + half, y2], WHITE, BORDER, width);
    }
}

fn notes(s: &mut Scene, bounds: [f32; 4], step: f32, lines: &[&str], style: TextStyle) {
    s.rounded_rect(bounds, AMBER, ACCENT, 2.0);
    column(
        s,
        (bounds[0] + 10.0, bounds[1] + 10.0),
        step,
        lines,
        style,
        TEXT,
    );
}

pub(super) fn authentication() -> Scene {
    let header = TextStyle::bold(14.0);
    let body = TextStyle::regular(12.0);
    let mut s = canvas(
        1000,
        850,
        "Діаграма послідовності - Автентифікація користувача",
        TITLE,
        30.0,
    );

    let lanes = Lanes {
        top: 80.0,
        half_width: 60.0,
        bottom: 750.0,
    };
    lanes.draw(
        &mut s,
        &[
            ("Користувач", 100.0),
            ("React App", 300.0),
            ("AuthController", 500.0),
            ("AuthService", 700.0),
            ("MongoDB", 900.0),
        ],
        header,
    );

    let arrows = Arrows {
        head: (10.0, 5.0),
        lift: 15.0,
        style: body,
    };
    arrows.draw(
        &mut s,
        &[
            msg(100.0, 300.0, "1. Введення email/password", 150.0, None),
            msg(300.0, 500.0, "2. POST /auth/login", 200.0, Some(PRIMARY)),
            msg(500.0, 700.0, "3. login(request)", 250.0, Some(ACCENT)),
            msg(
                700.0,
                900.0,
                "4. findByEmail(email)",
                300.0,
                Some(SECONDARY),
            ),
            msg(900.0, 700.0, "5. User object", 350.0, Some(SECONDARY)),
            msg(700.0, 700.0, "6. BCrypt.verify()", 400.0, None),
            msg(700.0, 700.0, "7. JwtUtils.generate()", 450.0, None),
            msg(
                700.0,
                500.0,
                "8. AuthResponse + tokens",
                500.0,
                Some(ACCENT),
            ),
            msg(
                500.0,
                300.0,
                "9. {accessToken, refreshToken}",
                550.0,
                Some(PRIMARY),
            ),
            msg(300.0, 300.0, "10. Zustand.setTokens()", 600.0, None),
            msg(
                300.0,
                100.0,
                "11. Redirect to Dashboard",
                650.0,
                Some(SECONDARY),
            ),
        ],
    );

    activations(
        &mut s,
        &[
            (300.0, 150.0, 660.0),
            (500.0, 200.0, 560.0),
            (700.0, 250.0, 510.0),
            (900.0, 300.0, 360.0),
        ],
        10.0,
        2.0,
    );

    notes(
        &mut s,
        [50.0, 720.0, 950.0, 800.0],
        18.0,
        &[
            "Примітки:",
            "• Пароль хешується за допомогою BCrypt перед збереженням",
            "• JWT токени мають термін дії: accessToken - 24 год, refreshToken - 30 днів",
            "• Токени зберігаються в Zustand store та localStorage для персистентності",
        ],
        body,
    );
    s
}

pub(super) fn progress_logging() -> Scene {
    let header = TextStyle::bold(14.0);
    let body = TextStyle::regular(12.0);
    let mut s = canvas(
        1000,
        800,
        "Діаграма послідовності - Логування прогресу",
        TextStyle::bold(22.0),
        25.0,
    );

    Lanes {
        top: 70.0,
        half_width: 50.0,
        bottom: 700.0,
    }
    .draw(
        &mut s,
        &[
            ("User", 100.0),
            ("GoalDetail\nPage", 300.0),
            ("ProgressAPI", 500.0),
            ("ProgressCtrl", 700.0),
            ("ProgressSvc", 900.0),
        ],
        header,
    );

    Arrows {
        head: (10.0, 5.0),
        lift: 15.0,
        style: body,
    }
    .draw(
        &mut s,
        &[
            msg(100.0, 300.0, "1. Click 'Mark Done'", 140.0, Some(BORDER)),
            msg(300.0, 500.0, "2. POST /progress", 190.0, Some(PRIMARY)),
            msg(500.0, 700.0, "3. createProgress()", 240.0, Some(ACCENT)),
            msg(700.0, 900.0, "4. saveProgress()", 290.0, Some(SECONDARY)),
            msg(900.0, 700.0, "5. Progress saved", 340.0, Some(SECONDARY)),
            msg(700.0, 700.0, "6. updateGoalStats()", 390.0, None),
            msg(700.0, 500.0, "7. ProgressResponse", 440.0, Some(ACCENT)),
            msg(500.0, 300.0, "8. {progress, updated}", 490.0, Some(PRIMARY)),
            msg(300.0, 300.0, "9. Update UI state", 540.0, None),
            msg(300.0, 100.0, "10. Show checkmark", 590.0, Some(SECONDARY)),
        ],
    );

    activations(
        &mut s,
        &[
            (300.0, 140.0, 600.0),
            (500.0, 190.0, 500.0),
            (700.0, 240.0, 450.0),
            (900.0, 290.0, 350.0),
        ],
        10.0,
        2.0,
    );

    notes(
        &mut s,
        [50.0, 650.0, 950.0, 750.0],
        25.0,
        &[
            "Примітки:",
            "• Кожне логування прогресу оновлює статистику цілі (completion rate, streak)",
            "• Система автоматично перевіряє досягнення milestone'ів",
            "• UI оновлюється реактивно без перезавантаження сторінки",
        ],
        body,
    );
    s
}

pub(super) fn group_joining() -> Scene {
    let header = TextStyle::bold(14.0);
    let body = TextStyle::regular(11.0);
    let mut s = canvas(
        1100,
        850,
        "Діаграма послідовності - Створення та приєднання до групи",
        TextStyle::bold(22.0),
        25.0,
    );

    Lanes {
        top: 70.0,
        half_width: 45.0,
        bottom: 750.0,
    }
    .draw(
        &mut s,
        &[
            ("User A\n(Creator)", 80.0),
            ("Groups\nPage", 250.0),
            ("GroupsAPI", 420.0),
            ("GroupCtrl", 590.0),
            ("GroupSvc", 760.0),
            ("User B\n(Member)", 930.0),
        ],
        header,
    );

    let arrows = Arrows {
        head: (8.0, 4.0),
        lift: 12.0,
        style: TextStyle::regular(10.0),
    };

    s.centered((550.0, 140.0), "Phase 1: Створення групи", header, ACCENT);
    arrows.draw(
        &mut s,
        &[
            msg(80.0, 250.0, "1. Fill group form", 165.0, Some(BORDER)),
            msg(250.0, 420.0, "2. POST /groups", 190.0, Some(PRIMARY)),
            msg(420.0, 590.0, "3. createGroup()", 215.0, Some(ACCENT)),
            msg(590.0, 760.0, "4. saveGroup()", 240.0, Some(SECONDARY)),
            msg(760.0, 590.0, "5. Group created", 265.0, Some(SECONDARY)),
            msg(590.0, 420.0, "6. GroupResponse", 290.0, Some(ACCENT)),
            msg(420.0, 250.0, "7. {group, code}", 315.0, Some(PRIMARY)),
            msg(250.0, 80.0, "8. Show invite code", 340.0, Some(SECONDARY)),
        ],
    );

    s.line(&[(50.0, 380.0), (1050.0, 380.0)], BORDER, 2.0);

    s.centered(
        (550.0, 400.0),
        "Phase 2: Приєднання до групи",
        header,
        SECONDARY,
    );
    arrows.draw(
        &mut s,
        &[
            msg(930.0, 250.0, "9. Enter code", 425.0, Some(BORDER)),
            msg(250.0, 420.0, "10. POST /groups/join", 450.0, Some(PRIMARY)),
            msg(420.0, 590.0, "11. joinGroup(code)", 475.0, Some(ACCENT)),
            msg(590.0, 760.0, "12. addMember()", 500.0, Some(SECONDARY)),
            msg(760.0, 590.0, "13. Membership OK", 525.0, Some(SECONDARY)),
            msg(590.0, 420.0, "14. Success response", 550.0, Some(ACCENT)),
            msg(420.0, 250.0, "15. {membership}", 575.0, Some(PRIMARY)),
            msg(250.0, 930.0, "16. Welcome msg", 600.0, Some(SECONDARY)),
        ],
    );

    activations(
        &mut s,
        &[
            (250.0, 165.0, 345.0),
            (420.0, 190.0, 320.0),
            (590.0, 215.0, 295.0),
            (760.0, 240.0, 270.0),
            (250.0, 425.0, 605.0),
            (420.0, 450.0, 580.0),
            (590.0, 475.0, 555.0),
            (760.0, 500.0, 530.0),
        ],
        8.0,
        1.0,
    );

    notes(
        &mut s,
        [50.0, 680.0, 1050.0, 800.0],
        22.0,
        &[
            "Примітки:",
            "• Група створюється з унікальним invite code для приєднання інших користувачів",
            "• Власник групи (creator) автоматично стає ADMIN",
            "• Нові члени приєднуються зі статусом MEMBER за кодом запрошення",
            "• Система валідує права доступу перед кожною операцією",
        ],
        body,
    );
    s
}
